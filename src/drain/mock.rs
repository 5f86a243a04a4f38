// @file mock.rs

use std::io::{Error, ErrorKind, Read, Result};

use rand::{rngs::SmallRng, Rng, SeedableRng};

const CHUNK_CAP: usize = 29 * 5;

// replays a pattern in random-length chunks, then signals end-of-stream
pub struct MockSource {
    v: Vec<u8>,
    offset: usize,
    rng: SmallRng,
}

impl MockSource {
    pub fn new(pattern: &[u8]) -> Self {
        MockSource {
            v: pattern.to_vec(),
            offset: 0,
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Read for MockSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.offset >= self.v.len() {
            return Ok(0);
        }

        let cap: usize = self.rng.gen_range(1..=CHUNK_CAP);
        let len = std::cmp::min(cap, buf.len());
        let len = std::cmp::min(len, self.v.len() - self.offset);

        buf[..len].copy_from_slice(&self.v[self.offset..self.offset + len]);
        self.offset += len;

        Ok(len)
    }
}

// replays a pattern like MockSource, then fails instead of reporting eof
pub struct BrokenSource {
    src: MockSource,
}

impl BrokenSource {
    pub fn new(pattern: &[u8]) -> Self {
        BrokenSource {
            src: MockSource::new(pattern),
        }
    }
}

impl Read for BrokenSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.src.read(buf)? {
            0 => Err(Error::new(ErrorKind::Other, "broken pipe (mock)")),
            len => Ok(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tester::*;
    use super::*;

    // equivalent to Read::read_to_end except that the chunk length is random
    fn read_all<T>(mut src: T) -> (Vec<u8>, Result<()>)
    where
        T: Sized + Read,
    {
        let mut rng = SmallRng::from_entropy();
        let mut v = Vec::new();

        loop {
            let cap: usize = rng.gen_range(1..=2 * CHUNK_CAP);
            let len = v.len();
            v.resize(len + cap, 0);

            match src.read(&mut v[len..len + cap]) {
                Ok(fwd) => {
                    v.resize(len + fwd, 0);
                    if fwd == 0 {
                        return (v, Ok(()));
                    }
                }
                Err(err) => {
                    v.resize(len, 0);
                    return (v, Err(err));
                }
            }
        }
    }

    #[test]
    fn test_mock_source_read_all() {
        macro_rules! test {
            ( $pattern: expr ) => {{
                let pattern = $pattern;
                let (v, ret) = read_all(MockSource::new(&pattern));

                assert_eq!(v, pattern);
                assert!(ret.is_ok());
            }};
        }

        test!(rep!(b"a", 3000));
        test!(rep!(b"abc", 3000));
        test!(rep!(b"abcbc", 3000));
        test!(rep!(b"abcbcdefghijklmno", 1001));
    }

    #[test]
    fn test_broken_source_read_all() {
        macro_rules! test {
            ( $pattern: expr ) => {{
                let pattern = $pattern;
                let (v, ret) = read_all(BrokenSource::new(&pattern));

                // all bytes delivered intact before the failure
                assert_eq!(v, pattern);
                assert!(ret.is_err());
            }};
        }

        test!(rep!(b"a", 3000));
        test!(rep!(b"abcbcdefghijklmno", 1001));
    }
}

// end of mock.rs
