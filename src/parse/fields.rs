use std::str::CharIndices;

/// Splits text on a separator, yielding each field trimmed of whitespace along with the
/// index where the field starts
pub(crate) struct Fields<'a> {
    s: &'a str,
    chars: CharIndices<'a>,
    start: Option<usize>,
    separator: char,
}

impl<'a> Fields<'a> {
    pub fn new(s: &'a str, separator: char) -> Self {
        Fields {
            s,
            chars: s.char_indices(),
            start: Some(0),
            separator,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;
        let end = loop {
            match self.chars.next() {
                Some((i, c)) if c == self.separator => {
                    self.start = Some(i + c.len_utf8());
                    break i;
                }
                Some(_) => {}
                None => {
                    self.start = None;
                    break self.s.len();
                }
            }
        };
        let field = &self.s[start..end];
        let trimmed = field.trim_start();
        let index = start + (field.len() - trimmed.len());
        Some((index, trimmed.trim_end()))
    }
}
