use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

/// Returns the payload bounds of the first complete frame in the buffer,
/// or None while the length prefix or payload is still partial.
pub fn dequeue_msg(input_buffer: &[u8]) -> Option<(usize, usize)> {
    if input_buffer.len() < 4 {
        return None;
    }

    let mut rdr = Cursor::new(&input_buffer);

    let msg_ln = rdr.read_u32::<LittleEndian>().unwrap() as usize;

    let end = msg_ln + 4;

    if input_buffer.len() < end {
        return None;
    }

    Some((4, end))
}
