use crate::errors::InputError;
use crate::Coordinate;
use std::io::{BufRead, Lines};

/**
 * Lazily reads taxi locations from a whitespace separated text file.
 *
 * The first line is a header and is skipped.  Every following non-blank line
 * holds `longitude latitude`.  One line is read per call to `next`.
 */
pub struct LocationReader<R> {
    lines: Lines<R>,
    line_number: usize,
    header_read: bool,
}

impl<R: BufRead> LocationReader<R> {
    pub fn new(reader: R) -> Self {
        LocationReader {
            lines: reader.lines(),
            line_number: 0,
            header_read: false,
        }
    }

    fn next_line(&mut self) -> Option<Result<String, InputError>> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line.map_err(InputError::from))
    }

    fn skip_header(&mut self) -> Result<(), InputError> {
        self.header_read = true;
        match self.next_line() {
            None => Err(InputError::MissingHeader),
            Some(line) => line.map(|_| ()),
        }
    }
}

fn parse_location(line_number: usize, line: &str) -> Result<Coordinate, InputError> {
    let malformed = || InputError::Malformed {
        line: line_number,
        content: line.to_string(),
    };
    let mut fields = line.split_whitespace();
    let (lng, lat) = match (fields.next(), fields.next(), fields.next()) {
        (Some(lng), Some(lat), None) => (lng, lat),
        _ => return Err(malformed()),
    };
    let lng: f64 = lng.parse().map_err(|_| malformed())?;
    let lat: f64 = lat.parse().map_err(|_| malformed())?;
    Ok(Coordinate::new(lng, lat))
}

impl<R: BufRead> Iterator for LocationReader<R> {
    type Item = Result<Coordinate, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_read {
            if let Err(e) = self.skip_header() {
                return Some(Err(e));
            }
        }
        loop {
            let line = match self.next_line()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_location(self.line_number, &line));
        }
    }
}
