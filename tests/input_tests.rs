//! Key and swipe input driving a game state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_2048::core::{GameConfig, GameState, Grid};
use tui_2048::input::{command_for_key, Command, SwipeTracker};
use tui_2048::types::{Direction, GameAction};

fn key(c: char) -> KeyEvent {
    KeyEvent::from(KeyCode::Char(c))
}

#[test]
fn test_vim_and_wasd_keys_agree_with_arrows() {
    let pairs = [
        (KeyCode::Up, 'k', 'w'),
        (KeyCode::Down, 'j', 's'),
        (KeyCode::Left, 'h', 'a'),
        (KeyCode::Right, 'l', 'd'),
    ];
    for (arrow, vim, wasd) in pairs {
        let expected = command_for_key(KeyEvent::from(arrow));
        assert!(matches!(expected, Some(Command::Action(GameAction::Move(_)))));
        assert_eq!(command_for_key(key(vim)), expected);
        assert_eq!(command_for_key(key(wasd)), expected);
    }
}

#[test]
fn test_ctrl_c_quits_but_plain_c_does_not() {
    assert_eq!(
        command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Command::Quit)
    );
    assert_eq!(command_for_key(key('c')), None);
}

#[test]
fn test_swipe_drives_a_move() {
    let grid = Grid::from_rows(vec![vec![0, 0, 2], vec![0, 0, 2], vec![0, 0, 0]]).unwrap();
    let mut state = GameState::from_grid(grid, GameConfig::default(), 1);
    let mut swipe = SwipeTracker::with_threshold(2);

    swipe.press(40, 10);
    let direction = swipe.release(41, 4).unwrap();
    assert_eq!(direction, Direction::Up);

    let outcome = state.apply_action(GameAction::Move(direction)).unwrap();
    assert!(outcome.changed);
    assert_eq!(state.grid().get(0, 2), Some(4));
}

#[test]
fn test_action_names_round_trip_through_parser() {
    for action in [
        GameAction::Move(Direction::Left),
        GameAction::Restart,
        GameAction::Grow,
        GameAction::Shrink,
    ] {
        assert_eq!(GameAction::from_str(action.as_str()), Some(action));
    }
}
