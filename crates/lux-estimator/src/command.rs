/// Command received over the serial console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Sound the buzzer for the manual alert window
    BuzzerTest,
}

impl Command {
    /// Decode a single input byte; anything unrecognised is ignored
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'b' | b'B' => Some(Command::BuzzerTest),
            _ => None,
        }
    }

    /// Decode every recognised command in a chunk of input
    pub fn decode(bytes: &[u8]) -> impl Iterator<Item = Command> + '_ {
        bytes.iter().copied().filter_map(Self::from_byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(Command::from_byte(b'b'), Some(Command::BuzzerTest));
        assert_eq!(Command::from_byte(b'B'), Some(Command::BuzzerTest));
        assert_eq!(Command::from_byte(b'a'), None);
        assert_eq!(Command::from_byte(b'\n'), None);
    }

    #[test]
    fn test_decode_skips_noise() {
        let mut commands = Command::decode(b"xb\r\nB?");
        assert_eq!(commands.next(), Some(Command::BuzzerTest));
        assert_eq!(commands.next(), Some(Command::BuzzerTest));
        assert_eq!(commands.next(), None);
    }
}
