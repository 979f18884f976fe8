use std::io::{Cursor, Write};

use anyhow::bail;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::dequeue::dequeue_msg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerServerMsg {
    Disconnect,
    /// Read-only art query. The id names the token the viewer asks about;
    /// a server instance holds one collection and answers with it.
    RequestTokenArt(u32),
}

impl ViewerServerMsg {
    pub fn dequeue_and_decode(
        input_buffer: &[u8],
    ) -> Option<(usize, anyhow::Result<ViewerServerMsg>)> {
        let Some((begin, end)) = dequeue_msg(input_buffer) else { return None };
        let msg = Self::decode(&input_buffer[begin..end]);
        Some((end, msg))
    }

    pub fn decode(input_buffer: &[u8]) -> anyhow::Result<ViewerServerMsg> {
        let mut rdr = Cursor::new(&input_buffer);
        let msg_type_index = rdr.read_u32::<LittleEndian>()?;

        let msg = match msg_type_index {
            0 => ViewerServerMsg::Disconnect,
            1 => {
                let token_id = rdr.read_u32::<LittleEndian>()?;
                ViewerServerMsg::RequestTokenArt(token_id)
            }
            type_index => {
                bail!("unsupported msg type: {type_index}");
            }
        };

        Ok(msg)
    }

    pub fn pack(&self, wtr: &mut impl Write) {
        match self {
            ViewerServerMsg::Disconnect => {
                wtr.write_u32::<LittleEndian>(4).unwrap();
                wtr.write_u32::<LittleEndian>(0).unwrap();
            }
            ViewerServerMsg::RequestTokenArt(token_id) => {
                wtr.write_u32::<LittleEndian>(8).unwrap();
                wtr.write_u32::<LittleEndian>(1).unwrap();
                wtr.write_u32::<LittleEndian>(*token_id).unwrap();
            }
        }
    }
}
