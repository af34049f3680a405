//! Menu loop: print the menu, read a choice, prompt for its argument, dispatch,
//! report. Ends on Exit or end of input.

use core_actions::{DispatchResult, MENU, MenuChoice, dispatch};
use core_state::{HistoryPolicy, Session};
use std::io::{self, BufRead, Write};

pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    policy: HistoryPolicy,
) -> io::Result<()> {
    let mut session = Session::default();
    loop {
        writeln!(output, "{MENU}")?;
        write!(output, "Enter choice: ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            tracing::debug!(target: "runtime", "input_eof");
            break;
        };

        let choice = MenuChoice::parse(&line);
        let answer = match choice.prompt() {
            Some(prompt) => {
                write!(output, "{prompt}")?;
                output.flush()?;
                read_line(&mut input)?
            }
            None => None,
        };

        let missing = choice.missing_argument();
        let result = match choice.into_command(answer.as_deref()) {
            Some(command) => dispatch(command, &mut session, policy),
            None => DispatchResult::failed(missing.unwrap_or("Invalid choice!")),
        };
        writeln!(output, "{}", result.message)?;
        writeln!(output)?;
        if result.quit {
            break;
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
