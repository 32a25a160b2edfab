use crate::core::Vec3;
use std::fmt::Write;

/// Append-only CSV text accumulated in memory until shutdown
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    text: String,
    rows: usize,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Vec3) {
        // fmt::Write for String cannot fail
        let _ = writeln!(self.text, "{}", point);
        self.rows += 1;
    }

    pub fn extend<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vec3>,
    {
        for point in points {
            self.push(point);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn len_bytes(&self) -> usize {
        self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_newline_terminated() {
        let mut buffer = SampleBuffer::new();
        buffer.push(Vec3::new(1.0, 2.5, -3.25));
        buffer.push(Vec3::new(0.0, 0.0, 0.0));

        assert_eq!(buffer.as_str(), "1,2.5,-3.25\n0,0,0\n");
        assert_eq!(buffer.rows(), 2);
        assert_eq!(buffer.as_str().lines().count(), buffer.rows());
        assert_eq!(buffer.len_bytes(), buffer.as_str().len());
    }
}
