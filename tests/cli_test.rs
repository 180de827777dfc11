use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.arg("tests/fixtures/ops.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("branch,account,holder,balance"))
        // Jane: 250 deposited, 40 withdrawn
        .stdout(predicate::str::contains("0001,1,Jane Roe,210.00"))
        // John: single account resolved without an explicit number
        .stdout(predicate::str::contains("0001,2,John Roe,500.00"));

    Ok(())
}
