use crate::arch::Register;
use crate::monitor::command::CommandError;
use crate::monitor::{Monitor, MonitorCommand as Cmd, Stop};
use crate::reg::State;
use std::str::FromStr;

/// A program which counts A up forever:
///
/// ```text
/// 0000: SET A, 0x0
/// 0001: ADD A, 0x1
/// 0002: SET PC, 0x1
/// ```
fn counter() -> Monitor {
    let mut state = State::default();
    state
        .memory_mut()
        .load(0, &[0x8001, 0x8402, 0x85C1])
        .unwrap();

    Monitor::new(state)
}

#[test]
fn monitor_step() {
    let mut mon = counter();

    assert_eq!(mon.step(), 1);
    assert_eq!(mon.step(), 2);
    assert_eq!(mon.state().get_register(Register::A), 1);
}

#[test]
fn monitor_run_to_breakpoint() {
    let mut mon = counter();
    mon.set_break(0x0002);

    assert_eq!(mon.run(None), Stop::Breakpoint(0x0002));
    assert_eq!(mon.state().get_register(Register::A), 1);
}

#[test]
fn monitor_run_leaves_current_breakpoint() {
    let mut mon = counter();
    mon.set_break(0x0002);

    mon.run(None);
    assert_eq!(mon.run(None), Stop::Breakpoint(0x0002));
    assert_eq!(mon.state().get_register(Register::A), 2);
}

#[test]
fn monitor_run_step_limit() {
    let mut mon = counter();

    assert_eq!(mon.run(Some(7)), Stop::StepLimit(7));
    assert_eq!(mon.state().get_register(Register::A), 3);
    assert_eq!(mon.state().get_register(Register::PC), 0x0001);
}

#[test]
fn monitor_breakpoints() {
    let mut mon = counter();

    mon.set_break(0x0020);
    mon.set_break(0x0002);
    mon.set_break(0x0020);

    assert_eq!(mon.iter_breaks().collect::<Vec<_>>(), vec![0x0002, 0x0020]);

    assert!(mon.remove_break(0x0020));
    assert!(!mon.remove_break(0x0020));
    assert_eq!(mon.iter_breaks().collect::<Vec<_>>(), vec![0x0002]);

    mon.clear_breaks();
    assert_eq!(mon.iter_breaks().count(), 0);
}

#[test]
fn monitor_removed_breakpoint_does_not_stop() {
    let mut mon = counter();
    mon.set_break(0x0002);
    mon.remove_break(0x0002);

    assert_eq!(mon.run(Some(10)), Stop::StepLimit(10));
}

#[test]
fn monitor_status() {
    let mut mon = counter();
    mon.step();

    assert_eq!(
        mon.status(),
        "PC:0x0001 SP:0xffff O:0x0000\n\
         A:0x0000 B:0x0000 C:0x0000 X:0x0000\n\
         Y:0x0000 Z:0x0000 I:0x0000 J:0x0000\n"
    );
}

#[test]
fn monitor_dump_mem() {
    let mon = counter();

    assert_eq!(
        mon.dump_mem(0x0000, 0x0009),
        "0x0000: 8001 8402 85c1 0000 0000 0000 0000 0000 \n\
         0x0008: 0000 0000 \n"
    );
}

#[test]
fn monitor_dump_end_of_memory() {
    let mon = counter();

    assert_eq!(mon.dump_mem(0xFFFE, 0xFFFF), "0xfffe: 0000 0000 \n");
}

#[test]
fn monitor_disassemble() {
    let mut mon = counter();
    mon.set_break(0x0002);

    assert_eq!(
        mon.disassemble(0x0000, 3),
        " 0000: SET A, 0x0\n 0001: ADD A, 0x1\n*0002: SET PC, 0x1\n"
    );
}

#[test]
fn monitor_display_does_not_mutate() {
    let mut mon = counter();
    mon.status();
    mon.dump_mem(0, 0xFFFF);
    mon.disassemble(0, 16);

    assert_eq!(mon.state().get_register(Register::PC), 0);
    assert_eq!(mon.step(), 1);
}

#[test]
fn command_parse() {
    assert_eq!(Cmd::from_str(""), Ok(Cmd::Step(1)));
    assert_eq!(Cmd::from_str("step"), Ok(Cmd::Step(1)));
    assert_eq!(Cmd::from_str("s 10"), Ok(Cmd::Step(10)));
    assert_eq!(Cmd::from_str("run"), Ok(Cmd::Run(None)));
    assert_eq!(Cmd::from_str("RUN 500"), Ok(Cmd::Run(Some(500))));
    assert_eq!(Cmd::from_str("break 0x20"), Ok(Cmd::Break(0x20)));
    assert_eq!(Cmd::from_str("delete $20"), Ok(Cmd::Delete(0x20)));
    assert_eq!(Cmd::from_str("clear"), Ok(Cmd::Clear));
    assert_eq!(Cmd::from_str("breaks"), Ok(Cmd::ListBreaks));
    assert_eq!(Cmd::from_str("regs"), Ok(Cmd::Status));
    assert_eq!(Cmd::from_str("dump 1000 1010"), Ok(Cmd::Dump(0x1000, 0x1010)));
    assert_eq!(Cmd::from_str("dump 1000"), Ok(Cmd::Dump(0x1000, 0x103F)));
    assert_eq!(Cmd::from_str("dump ffff"), Ok(Cmd::Dump(0xFFFF, 0xFFFF)));
    assert_eq!(Cmd::from_str("dis"), Ok(Cmd::Disassemble(None, 8)));
    assert_eq!(Cmd::from_str("dis 40 3"), Ok(Cmd::Disassemble(Some(0x40), 3)));
    assert_eq!(Cmd::from_str("quit"), Ok(Cmd::Quit));
    assert_eq!(Cmd::from_str("help"), Ok(Cmd::Help));
}

#[test]
fn command_parse_errors() {
    assert_eq!(
        Cmd::from_str("launch"),
        Err(CommandError::Unknown("launch".to_string()))
    );
    assert_eq!(
        Cmd::from_str("break"),
        Err(CommandError::MissingAddress("break"))
    );
    assert_eq!(
        Cmd::from_str("break main"),
        Err(CommandError::InvalidAddress("main".to_string()))
    );
    assert_eq!(
        Cmd::from_str("step -1"),
        Err(CommandError::InvalidCount("-1".to_string()))
    );
}
