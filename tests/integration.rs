use std::{cell::RefCell, rc::Rc, str::from_utf8};

use commission_fees::{bin_utils::Service, config::Config};

const TEST_FILE: &str = include_str!("operations.csv");

fn run(input: &str, config: Config) -> (Vec<String>, Vec<(u64, String)>) {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let mut output = Vec::new();
    let service = Service {
        input: input.as_bytes(),
        output: &mut output,
        config,
        error_printer: Box::new({
            let errors = Rc::clone(&errors);
            move |line, err| errors.borrow_mut().push((line, err.to_string()))
        }),
    };
    service.run().unwrap();

    let lines = from_utf8(&output)
        .unwrap()
        .lines()
        .map(ToOwned::to_owned)
        .collect();
    let errors = errors.borrow().clone();
    (lines, errors)
}

#[test]
fn process_operations() {
    let (lines, errors) = run(TEST_FILE, Config::default());
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(
        lines,
        [
            "0.60", "3.00", "0.00", "0.06", "0.90", "0", "0.70", "0.30", "0.30", "5.00", "0.00",
            "0.00", "8612",
        ]
    );
}

#[test]
fn rejected_rows_are_reported_and_skipped() {
    let input = "\
2016-01-05,1,natural,cash_out,1200.00,EUR
2016-01-05,1,natural,cash,100.00,EUR
2016-01-05,1,company,cash_out,100.00,EUR
2016-01-05,1,natural,cash_out,100.00,UAH
2016-01-05,1,natural,cash_out,abc,EUR
2016-01-06,1,natural,cash_out,100.00,EUR
";
    let (lines, errors) = run(input, Config::default());
    // the rejected rows did not count towards the weekly history
    assert_eq!(lines, ["0.60", "0.30"]);
    assert_eq!(
        errors[..3],
        [
            (2, "Unsupported operation type was provided cash".to_owned()),
            (3, "Unsupported person type was provided company".to_owned()),
            (4, "Unsupported currency was provided UAH".to_owned()),
        ]
    );
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[3].0, 5);
    assert!(errors[3].1.starts_with("Invalid amount `abc`"), "{}", errors[3].1);
}

#[test]
fn alternate_fee_schedule() {
    let mut config = Config::default();
    config.withdrawal.natural_free_count = 1;
    config.deposit.max_commission.amount = "1.00".parse().unwrap();
    let input = "\
2016-01-05,1,natural,cash_out,500.00,EUR
2016-01-06,1,natural,cash_out,100.00,EUR
2016-01-06,2,legal,cash_in,1000000.00,EUR
";
    let (lines, errors) = run(input, config);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(lines, ["0.00", "0.30", "1.00"]);
}
