//! Line reader accepting `\n`, `\r\n` and lone `\r` terminators

use std::io::{self, BufRead};

pub struct LineReader<R> {
	inner: R,
	/// Last line ended with `\r`; a following `\n` belongs to it
	skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
	pub fn new(inner: R) -> Self {
		Self { inner, skip_lf: false }
	}

	/// Raw bytes of the next line without its terminator. `None` at end of input.
	pub fn next_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
		if self.skip_lf {
			self.skip_lf = false;
			if self.inner.fill_buf()?.first() == Some(&b'\n') {
				self.inner.consume(1);
			}
		}

		let mut line = Vec::new();
		let mut read_any = false;
		loop {
			let buf = match self.inner.fill_buf() {
				Ok(buf) => buf,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			};
			if buf.is_empty() {
				return Ok(read_any.then_some(line));
			}
			read_any = true;

			match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
				Some(pos) => {
					line.extend_from_slice(&buf[..pos]);
					self.skip_lf = buf[pos] == b'\r';
					self.inner.consume(pos + 1);
					return Ok(Some(line));
				}
				None => {
					let len = buf.len();
					line.extend_from_slice(buf);
					self.inner.consume(len);
				}
			}
		}
	}

	/// Next line decoded as UTF-8, malformed bytes replaced with U+FFFD
	pub fn next_line_lossy(&mut self) -> io::Result<Option<String>> {
		Ok(self
			.next_bytes()?
			.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
	}

	/// Next line decoded as UTF-8, malformed bytes are an error
	pub fn next_line(&mut self) -> io::Result<Option<String>> {
		match self.next_bytes()? {
			Some(bytes) => String::from_utf8(bytes)
				.map(Some)
				.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
			None => Ok(None),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn collect(input: &[u8]) -> Vec<String> {
		let mut reader = LineReader::new(Cursor::new(input.to_vec()));
		let mut lines = Vec::new();
		while let Some(line) = reader.next_line_lossy().unwrap() {
			lines.push(line);
		}
		lines
	}

	#[test]
	fn all_terminators() {
		assert_eq!(collect(b"a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn blank_lines_between_terminators() {
		assert_eq!(collect(b"a\r\rb\n\n"), vec!["a", "", "b", ""]);
		assert_eq!(collect(b"\r\n"), vec![""]);
	}

	#[test]
	fn end_of_input() {
		assert!(collect(b"").is_empty());
	}

	#[test]
	fn lossy_replaces_bad_bytes() {
		assert_eq!(collect(b"love \xff\n"), vec!["love \u{FFFD}"]);
	}

	#[test]
	fn strict_rejects_bad_bytes() {
		let mut reader = LineReader::new(Cursor::new(b"\xffword\n".to_vec()));
		let err = reader.next_line().unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
	}

	#[test]
	fn terminator_split_across_buffer_refills() {
		let inner = io::BufReader::with_capacity(2, Cursor::new(b"ab\r\ncd".to_vec()));
		let mut reader = LineReader::new(inner);
		assert_eq!(reader.next_line().unwrap().as_deref(), Some("ab"));
		assert_eq!(reader.next_line().unwrap().as_deref(), Some("cd"));
		assert_eq!(reader.next_line().unwrap(), None);
	}
}
