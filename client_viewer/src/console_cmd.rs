use anyhow::{bail, Ok};

pub enum ConsoleCmd {
    Save (String),
    Show,
    Quit,
}

impl ConsoleCmd {
    pub fn parse(input: &str) -> anyhow::Result<ConsoleCmd> {
        let (cmd, rem) = match input.find(" ") {
            Some(i) => (&input[..i], input[i+1..].trim()),
            None => (&input[..], ""),
        };

        match cmd {
            "save" => {
                if rem.is_empty() {
                    bail!("save needs a file path");
                }
                Ok(ConsoleCmd::Save(rem.to_owned()))
            }
            "show" => {
                Ok(ConsoleCmd::Show)
            }
            "quit" => {
                Ok(ConsoleCmd::Quit)
            }
            _ => bail!("cmd not recognized"),
        }
    }
}
