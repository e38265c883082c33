use std::io;
use std::io::BufRead;

/// One lexical token, as encoded by the upstream tokenizer.
pub type Token = i16;

/// Sentinel returned for reads at or past a file's end.
pub const END_OF_FILE: Token = 0;

// Block delimiter codes are an interface contract with the tokenizer.
pub const BLOCK_OPEN: Token = 123;
pub const BLOCK_CLOSE: Token = 125;

/// Tokens of a single file plus the token offset at which each line starts.
#[derive(Debug)]
pub struct FileTokens {
    name: String,
    tokens: Vec<Token>,
    line_offsets: Vec<u32>,
}

impl FileTokens {
    fn new(name: String) -> Self {
        Self {
            name,
            tokens: Vec::new(),
            line_offsets: Vec::new(),
        }
    }

    fn add_line(&mut self) {
        self.line_offsets.push(self.tokens.len() as u32);
    }

    fn add_token(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn close(&mut self) {
        self.tokens.shrink_to_fit();
        self.line_offsets.shrink_to_fit();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Token offset at which the given 0-based line starts.
    pub fn line_start(&self, line: usize) -> usize {
        self.line_offsets[line] as usize
    }

    /// Token at `offset`, or `END_OF_FILE` when reading at or past the end.
    pub fn token(&self, offset: usize) -> Token {
        self.tokens.get(offset).copied().unwrap_or(END_OF_FILE)
    }

    pub fn line_is_empty(&self, line: usize) -> bool {
        let start = self.line_offsets[line] as usize;
        match self.line_offsets.get(line + 1) {
            Some(&next) => start == next as usize,
            None => start == self.tokens.len(),
        }
    }

    /// Tokens from the start of `line` through the end of the file.
    pub fn remaining_tokens(&self, line: usize) -> usize {
        self.tokens.len() - self.line_offsets[line] as usize
    }

    /// 0-based line containing token `offset`: the last line whose start
    /// offset does not exceed it. Empty lines share a start offset with
    /// their successor, so the latest of them wins.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_offsets
            .partition_point(|&start| start as usize <= offset)
            .saturating_sub(1)
    }

    /// Offset just past the last token of the line containing `offset`.
    pub fn line_end_of(&self, offset: usize) -> usize {
        match self.line_offsets.get(self.line_of(offset) + 1) {
            Some(&next) => next as usize,
            None => self.tokens.len(),
        }
    }

    /// Snap `offset` down to the nearest line start at or before it; the
    /// file's token count snaps to itself.
    pub fn preceding_eol_offset(&self, offset: usize) -> usize {
        if offset >= self.tokens.len() {
            self.tokens.len()
        } else {
            self.line_offsets[self.line_of(offset)] as usize
        }
    }
}

/// All tokenized files of one run; file ids are insertion positions.
/// Read-only once constructed.
#[derive(Debug, Default)]
pub struct TokenStore {
    files: Vec<FileTokens>,
}

impl TokenStore {
    /// Read the tokenizer's line-oriented stream: a line starting with `F`
    /// introduces a file (the rest of the line is its name), every other
    /// line is the whitespace-separated tokens of one source line.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<TokenStore> {
        let mut files: Vec<FileTokens> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(name) = line.strip_prefix('F') {
                if let Some(file) = files.last_mut() {
                    file.close();
                }
                files.push(FileTokens::new(name.to_string()));
                continue;
            }

            let Some(file) = files.last_mut() else {
                return Err(invalid_data(index, "token data before any file header"));
            };
            file.add_line();
            for raw in line.split_whitespace() {
                let token = raw
                    .parse::<Token>()
                    .map_err(|_| invalid_data(index, &format!("bad token value {raw:?}")))?;
                file.add_token(token);
            }
        }

        if let Some(file) = files.last_mut() {
            file.close();
        }
        Ok(TokenStore { files })
    }

    pub fn files(&self) -> &[FileTokens] {
        &self.files
    }

    pub fn file(&self, file_id: u32) -> &FileTokens {
        &self.files[file_id as usize]
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn token_count(&self) -> usize {
        self.files.iter().map(FileTokens::token_count).sum()
    }

    pub fn line_count(&self) -> usize {
        self.files.iter().map(FileTokens::line_count).sum()
    }
}

fn invalid_data(line_index: usize, message: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("input line {}: {message}", line_index + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(input: &str) -> TokenStore {
        TokenStore::from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn construct_captures_file_name() {
        let tc = store("Fname\n12 42\n\n7\n");
        assert_eq!(tc.file_count(), 1);
        assert_eq!(tc.file(0).name(), "name");
        assert_eq!(tc.file(0).tokens(), &[12, 42, 7]);
    }

    #[test]
    fn empty_lines_with_full_last_line() {
        let tc = store("Fname\n12 42\n\n7\n");
        let file = tc.file(0);
        assert!(!file.line_is_empty(0));
        assert!(file.line_is_empty(1));
        assert!(!file.line_is_empty(2));
    }

    #[test]
    fn empty_lines_with_empty_last_line() {
        let tc = store("Fname\n12 42\n\n7\n\n");
        let file = tc.file(0);
        assert!(!file.line_is_empty(0));
        assert!(file.line_is_empty(1));
        assert!(!file.line_is_empty(2));
        assert!(file.line_is_empty(3));
    }

    #[test]
    fn remaining_tokens_per_line() {
        let tc = store("Fname\n12 42\n\n7\n\n");
        let file = tc.file(0);
        assert_eq!(file.remaining_tokens(0), 3);
        assert_eq!(file.remaining_tokens(1), 1);
        assert_eq!(file.remaining_tokens(2), 1);
        assert_eq!(file.remaining_tokens(3), 0);
    }

    #[test]
    fn token_read_past_end_is_sentinel() {
        let tc = store("Fname\n12 42\n");
        let file = tc.file(0);
        assert_eq!(file.token(0), 12);
        assert_eq!(file.token(1), 42);
        assert_eq!(file.token(2), END_OF_FILE);
    }

    #[test]
    fn line_of_prefers_latest_shared_offset() {
        // Line starts are [0, 2, 2]; token 2 belongs to the line after the
        // empty one.
        let tc = store("Fname\n12 42\n\n7\n");
        let file = tc.file(0);
        assert_eq!(file.line_of(0), 0);
        assert_eq!(file.line_of(1), 0);
        assert_eq!(file.line_of(2), 2);
        assert_eq!(file.line_of(3), 2);
    }

    #[test]
    fn line_end_of_stops_at_next_line_or_file_end() {
        let tc = store("Fname\n12 42\n\n7\n");
        let file = tc.file(0);
        assert_eq!(file.line_end_of(0), 2);
        assert_eq!(file.line_end_of(1), 2);
        assert_eq!(file.line_end_of(2), 3);
    }

    #[test]
    fn preceding_eol_snaps_to_line_start() {
        let tc = store("Fname\n12 42 3\n4\n7\n");
        let file = tc.file(0);
        assert_eq!(file.preceding_eol_offset(0), 0);
        assert_eq!(file.preceding_eol_offset(2), 0);
        assert_eq!(file.preceding_eol_offset(3), 3);
        assert_eq!(file.preceding_eol_offset(4), 4);
        assert_eq!(file.preceding_eol_offset(5), 5);
    }

    #[test]
    fn multiple_files_in_arrival_order() {
        let tc = store("Fa\n1 2\nFb\n3\n");
        assert_eq!(tc.file_count(), 2);
        assert_eq!(tc.file(0).name(), "a");
        assert_eq!(tc.file(1).name(), "b");
        assert_eq!(tc.token_count(), 3);
        assert_eq!(tc.line_count(), 2);
    }

    #[test]
    fn empty_input_is_legal() {
        let tc = store("");
        assert_eq!(tc.file_count(), 0);
        assert_eq!(tc.token_count(), 0);
    }

    #[test]
    fn rejects_tokens_before_file_header() {
        let err = TokenStore::from_reader("12 42\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = TokenStore::from_reader("Fname\n12 x\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_out_of_range_token() {
        let err = TokenStore::from_reader("Fname\n40000\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
