use std::io;

mod input;

pub use input::{InputError, MoveInput};

/// Reads one line from stdin and parses it as a move.
pub fn parse_player_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Ok(MoveInput::Quit),
        Ok(_n) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
