//! Top-level E/S/Q menu

use super::{run_educator, run_student};
use crate::interactive::TextIo;
use crate::output::welcome_banner;
use crate::store::Store;
use anyhow::Result;
use rand::Rng;
use std::io::ErrorKind;
use tracing::debug;

/// Show the role menu until the user quits or input closes
///
/// # Errors
///
/// Returns an error if a session fails; see [`run_educator`] and
/// [`run_student`].
pub fn run_menu<S, T, R>(store: &mut S, io: &mut T, rng: &mut R) -> Result<()>
where
    S: Store,
    T: TextIo,
    R: Rng + ?Sized,
{
    loop {
        io.print(&welcome_banner())?;
        io.print("")?;

        let choice = match io.prompt("Are you an Educator or a Student (E/S), press Q to exit: ") {
            Ok(choice) => choice,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                debug!("input closed at the main menu");
                io.print("")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        io.print("")?;

        match choice.as_str() {
            "E" => run_educator(store, io)?,
            "S" => run_student(store, io, rng)?,
            "Q" => {
                io.print("Exiting Program !!")?;
                return Ok(());
            }
            _ => io.print("Enter a valid input !!")?,
        }
    }
}
