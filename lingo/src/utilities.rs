use std::io::{self, BufRead, Write};

pub fn input(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line(&mut io::stdin().lock())
}

/// A closed reader is `UnexpectedEof`, never an empty line.
pub fn read_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line)
}

/// Whether `error` comes from the learner closing the input.
pub fn is_end_of_input(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|error| error.kind() == io::ErrorKind::UnexpectedEof)
}

pub fn str_to_bool(mut str: String) -> Option<bool> {
    str.make_ascii_lowercase();
    match str.trim() {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" | "j" | "ja" | "o" | "oui" | "s" | "si"
        | "sí" => Some(true),
        "n" | "no" | "nope" | "false" | "off" | "nein" | "non" => Some(false),
        _ => None,
    }
}

/// Asks a yes/no question where a bare Enter means yes.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let answer = input(prompt)?;
    if answer.trim().is_empty() {
        return Ok(true);
    }
    Ok(str_to_bool(answer).unwrap_or(false))
}

pub fn wait_for_enter(prompt: &str) -> io::Result<()> {
    input(&format!("{prompt} "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_several_languages() {
        assert_eq!(str_to_bool("Ja\n".into()), Some(true));
        assert_eq!(str_to_bool(" oui ".into()), Some(true));
        assert_eq!(str_to_bool("NON".into()), Some(false));
        assert_eq!(str_to_bool("maybe".into()), None);
    }

    #[test]
    fn closed_input_is_not_a_blank_line() {
        let mut closed = io::Cursor::new("");
        let error = read_line(&mut closed).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
        assert!(is_end_of_input(&anyhow::Error::from(error)));
    }

    #[test]
    fn blank_line_is_still_a_line() {
        let mut lines = io::Cursor::new("\nstatus\n");
        assert_eq!(read_line(&mut lines).unwrap(), "\n");
        assert_eq!(read_line(&mut lines).unwrap(), "status\n");
        assert!(read_line(&mut lines).is_err());
    }
}
