use crate::arch::Register;
use crate::reg::State;

#[test]
fn test_initial_state() {
    let state = State::default();

    for reg in Register::enumerate().iter() {
        match reg {
            Register::SP => assert_eq!(state.get_register(*reg), 0xFFFF),
            _ => assert_eq!(state.get_register(*reg), 0, "register {}", reg),
        }
    }

    assert_eq!(state.get_memory(0x0000), 0);
    assert_eq!(state.get_memory(0xFFFF), 0);
}

#[test]
fn test_registers_are_independent() {
    let mut state = State::default();

    state.set_register(Register::X, 0x1234);
    state.set_register(Register::O, 0xFFFF);

    assert_eq!(state.get_register(Register::X), 0x1234);
    assert_eq!(state.get_register(Register::O), 0xFFFF);
    assert_eq!(state.get_register(Register::A), 0);
    assert_eq!(state.get_register(Register::Y), 0);
}

#[test]
fn test_next_word_advances_pc() {
    let mut state = State::default();
    state.set_memory(0x0000, 0xAAAA);
    state.set_memory(0x0001, 0xBBBB);

    assert_eq!(state.next_word(), 0xAAAA);
    assert_eq!(state.next_word(), 0xBBBB);
    assert_eq!(state.get_register(Register::PC), 0x0002);
}

#[test]
fn test_next_word_wraps_pc() {
    let mut state = State::default();
    state.set_register(Register::PC, 0xFFFF);
    state.set_memory(0xFFFF, 0x4242);

    assert_eq!(state.next_word(), 0x4242);
    assert_eq!(state.get_register(Register::PC), 0x0000);
}

#[test]
fn test_memory_mut_is_shared_with_reads() {
    let mut state = State::default();

    state.memory_mut().load(0x0010, &[1, 2, 3]).unwrap();

    assert_eq!(state.get_memory(0x0011), 2);
    assert_eq!(state.memory().read(0x0012), 3);
}
