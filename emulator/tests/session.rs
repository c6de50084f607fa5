use indoc::indoc;
use pretty_assertions::assert_eq;

use simpletron::console::ScriptedConsole;
use simpletron::runtime::{Exception, ProcessorError};
use simpletron::session::SessionError;
use simpletron::{Config, Mode};

/// Reads two numbers, adds them and prints the sum
const SUM_PROGRAM: [&str; 8] = [
    "1007", // 00: READ 07
    "1008", // 01: READ 08
    "2007", // 02: LOAD 07
    "3008", // 03: ADD 08
    "2109", // 04: STORE 09
    "1109", // 05: WRITE 09
    "4300", // 06: HALT
    "-99999",
];

const SUM_TRANSCRIPT: &str = indoc! {"
    00 ? 1007
    01 ? 1008
    02 ? 2007
    03 ? 3008
    04 ? 2109
    05 ? 1109
    06 ? 4300
    07 ? -99999
    *** Program loading completed ***
    *** Program execution begins ***
    ? 5
    ? 3
    8
    *** Simpletron execution terminated ***
    REGISTERS:
    accumulator \t\t+0008
    instructionCounter \t   06
    instructionRegister \t+4300
    operationCode \t\t   43
    operand \t\t   00

    MEMORY:
           0     1     2     3     4     5     6     7     8     9
    00 +1007 +1008 +2007 +3008 +2109 +1109 +4300 +0005 +0003 +0008
    10 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    20 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    30 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    40 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    50 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    60 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    70 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    80 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000
    90 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000 +0000

"};

fn console(program: &[&str], inputs: &[&str]) -> ScriptedConsole {
    ScriptedConsole::new(program.iter().chain(inputs).copied())
}

#[test]
fn sum_strict_legacy_test() {
    let mut console = console(&SUM_PROGRAM, &["5", "3"]);
    let computer = simpletron::run(&mut console, Config::default()).unwrap();

    assert_eq!(console.transcript(), SUM_TRANSCRIPT);
    assert_eq!(computer.registers.accumulator, 8);
    // The words after HALT were executed as no-ops until the end of memory
    assert!(computer.is_finished());
    assert_eq!(computer.cycles, 100);
}

#[test]
fn sum_corrected_test() {
    let mut console = console(&SUM_PROGRAM, &["5", "3"]);
    let computer = simpletron::run(&mut console, Config::with_mode(Mode::Corrected)).unwrap();

    assert_eq!(console.transcript(), SUM_TRANSCRIPT);
    assert_eq!(computer.registers.instruction_counter, 6);
    assert_eq!(computer.cycles, 7);
}

#[test]
fn countdown_loop_test() {
    // Prints 3, 2, 1 using a backwards branch.
    //
    // In strict legacy mode a branch to `k` resumes at `k + 1`, so the loop
    // targets the address right before its first instruction.
    let program = [
        "2010", // 00: LOAD 10
        "1110", // 01: WRITE 10
        "3111", // 02: SUBTRACT 11
        "2110", // 03: STORE 10
        "4206", // 04: BRANCHZERO 06 (resumes at 07)
        "4000", // 05: BRANCH 00 (resumes at 01)
        "0",    // 06
        "4300", // 07: HALT
        "0",    // 08
        "0",    // 09
        "3",    // 10: counter
        "1",    // 11: decrement
        "-99999",
    ];
    let mut console = console(&program, &[]);
    let computer = simpletron::run(&mut console, Config::default()).unwrap();

    let output: Vec<_> = console
        .transcript()
        .lines()
        .skip_while(|line| !line.starts_with("*** Program execution begins"))
        .skip(1)
        .take(4)
        .collect();
    assert_eq!(output, ["3", "2", "1", "*** Simpletron execution terminated ***"]);
    assert_eq!(computer.memory.get(10), Ok(0));
}

#[test]
fn overflow_fault_test() {
    let program = [
        "1010", // 00: READ 10
        "2010", // 01: LOAD 10
        "3310", // 02: MULTIPLY 10
        "4300", // 03: HALT
        "-99999",
    ];
    let mut console = console(&program, &["100"]);
    let res = simpletron::run(&mut console, Config::default());

    assert!(matches!(
        res,
        Err(SessionError::Processor(ProcessorError::Exception(
            Exception::AccumulatorOverflow
        )))
    ));
    assert!(console.transcript().ends_with(indoc! {"
        ? 100
        *** Out of accumulator limit ***
        *** Simpletron execution abnormally terminated ***
    "}));
    assert!(!console.transcript().contains("REGISTERS:"));
}

#[test]
fn read_fault_test() {
    let program = ["1010", "4300", "-99999"];
    let mut console = console(&program, &["12345"]);
    let res = simpletron::run(&mut console, Config::default());

    assert!(matches!(
        res,
        Err(SessionError::Processor(ProcessorError::Exception(
            Exception::ReadOutOfRange { address: 10 }
        )))
    ));
    assert!(console.transcript().ends_with(indoc! {"
        ? 12345
        *** Out of memory ***
        *** Simpletron execution abnormally terminated ***
    "}));
}

#[test]
fn divide_by_zero_fault_test() {
    // 00: DIVIDE 05, with a zero at 05
    let program = ["3205", "4300", "-99999"];
    let mut console = console(&program, &[]);
    let res = simpletron::run(&mut console, Config::default());

    assert!(matches!(
        res,
        Err(SessionError::Processor(ProcessorError::Exception(
            Exception::DivByZero
        )))
    ));
    assert!(console.transcript().ends_with(indoc! {"
        *** Program execution begins ***
        *** Attempt to divide by zero ***
        *** Simpletron execution abnormally terminated ***
    "}));
}

#[test]
fn input_closed_while_loading_test() {
    let mut console = console(&["1007"], &[]);
    let res = simpletron::run(&mut console, Config::default());

    assert!(matches!(res, Err(SessionError::Load(_))));
    assert_eq!(
        console.transcript(),
        indoc! {"
            00 ? 1007
            01 ? *** Input stream closed ***
            *** Simpletron execution abnormally terminated ***
        "}
    );
}

#[test]
fn empty_program_test() {
    let mut console = console(&["-99999"], &[]);
    let computer = simpletron::run(&mut console, Config::default()).unwrap();

    assert_eq!(
        console.transcript(),
        indoc! {"
            00 ? -99999
            *** Program loading completed ***
            *** Program execution begins ***
        "}
    );
    assert!(computer.is_finished());
}
