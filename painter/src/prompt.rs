use std::fmt;
use std::io::{self, BufRead, Write};

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Answers {
    pub credentials: Credentials,
    /// Already upper-cased.
    pub text: String,
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<String> {
    write!(output, "{question} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no answer to {question:?}"),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn read_answers(mut input: impl BufRead, mut output: impl Write) -> io::Result<Answers> {
    let username = ask(&mut input, &mut output, "Enter your GitHub username:")?;
    let password = ask(&mut input, &mut output, "Enter your GitHub password:")?;
    let text = ask(
        &mut input,
        &mut output,
        "Enter your desired text to show on the contributions history:",
    )?;

    Ok(Answers {
        credentials: Credentials {
            username: username.trim().to_string(),
            password,
        },
        text: text.to_uppercase(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_three_answers_in_order() {
        let input = Cursor::new("octo\n s3cret \nHello World\r\n");
        let mut output = Vec::new();
        let answers = read_answers(input, &mut output).unwrap();

        assert_eq!(answers.credentials.username, "octo");
        assert_eq!(answers.credentials.password, " s3cret ");
        assert_eq!(answers.text, "HELLO WORLD");

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Enter your GitHub username: "));
        assert!(output.ends_with("Enter your desired text to show on the contributions history: "));
    }

    #[test]
    fn closed_input_is_an_error() {
        let error = read_answers(Cursor::new("octo\n"), Vec::new()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn password_is_not_printed() {
        let credentials = Credentials {
            username: "octo".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
