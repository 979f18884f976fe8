use std::io::{Cursor, Write};

use anyhow::{bail, Context};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::dequeue::dequeue_msg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerViewerMsg {
    AssignSessionId(u32),
    /// The serialized markup for the named token, UTF-8 after the id.
    TokenArt { token_id: u32, svg: String },
}

impl ServerViewerMsg {
    pub fn dequeue_and_decode(
        input_buffer: &[u8],
    ) -> Option<(usize, anyhow::Result<ServerViewerMsg>)> {
        let Some((begin, end)) = dequeue_msg(input_buffer) else { return None };
        let msg = Self::decode(&input_buffer[begin..end]);
        Some((end, msg))
    }

    pub fn decode(input_buffer: &[u8]) -> anyhow::Result<ServerViewerMsg> {
        let mut rdr = Cursor::new(&input_buffer);
        let msg_type_index = rdr.read_u32::<LittleEndian>()?;

        let begin = 4;

        let msg = match msg_type_index {
            0 => {
                let session_id = rdr.read_u32::<LittleEndian>()?;
                ServerViewerMsg::AssignSessionId(session_id)
            }
            1 => {
                let token_id = rdr.read_u32::<LittleEndian>()?;
                let svg = String::from_utf8(input_buffer[begin + 4..].to_vec())
                    .context("token art is not valid utf-8")?;
                ServerViewerMsg::TokenArt { token_id, svg }
            }
            type_index => {
                bail!("unsupported msg type: {type_index}");
            }
        };

        Ok(msg)
    }

    pub fn pack(&self, wtr: &mut impl Write) {
        match self {
            ServerViewerMsg::AssignSessionId(session_id) => {
                wtr.write_u32::<LittleEndian>(8).unwrap();
                wtr.write_u32::<LittleEndian>(0).unwrap();
                wtr.write_u32::<LittleEndian>(*session_id).unwrap();
            }
            ServerViewerMsg::TokenArt { token_id, svg } => {
                wtr.write_u32::<LittleEndian>(8 + svg.len() as u32).unwrap();
                wtr.write_u32::<LittleEndian>(1).unwrap();
                wtr.write_u32::<LittleEndian>(*token_id).unwrap();
                wtr.write_all(svg.as_bytes()).unwrap();
            }
        }
    }
}
