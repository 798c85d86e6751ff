use crate::error::Result;
use crate::storage::read_record;
use flatcalc_engine::engine::{ResultSequence, TokenBuffer, compile};
use log::info;
use std::path::{Path, PathBuf};

/// One tokenized record and where it came from.
#[derive(Clone, Debug)]
pub struct Document {
    /// Tokens of the record; never modified after loading
    buffer: TokenBuffer,
    /// Source file, if loaded from disk
    pub file_path: Option<PathBuf>,
}

impl Document {
    /// Load and tokenize a record file.
    pub fn open(path: &Path, require_csv_extension: bool) -> Result<Document> {
        let text = read_record(path, require_csv_extension)?;
        let buffer = TokenBuffer::tokenize(&text)?;
        info!("loaded {} ({} cells)", path.display(), buffer.len());
        Ok(Document {
            buffer,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Tokenize record text that did not come from a file.
    pub fn from_text(text: &str) -> Result<Document> {
        Ok(Document {
            buffer: TokenBuffer::tokenize(text)?,
            file_path: None,
        })
    }

    pub fn buffer(&self) -> &TokenBuffer {
        &self.buffer
    }

    /// Evaluate every cell. Repeated calls give the same results.
    pub fn compile(&self) -> Result<ResultSequence> {
        Ok(compile(&self.buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlatcalcError;
    use flatcalc_engine::CalcError;

    #[test]
    fn test_from_text_compiles() {
        let doc = Document::from_text(r#"10,20,=SUM(A1:B1),"=AVG(A1,B1)""#).unwrap();
        assert_eq!(doc.buffer().len(), 4);
        assert_eq!(doc.compile().unwrap().to_string(), "[10, 20, 30, 15]");
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_from_empty_text_fails() {
        let err = Document::from_text(" \n ").unwrap_err();
        assert!(matches!(err, FlatcalcError::Calc(CalcError::Tokenization)));
    }

    #[test]
    fn test_compile_error_is_wrapped() {
        let doc = Document::from_text("1 =SUM(B1:A1)").unwrap();
        assert!(matches!(
            doc.compile(),
            Err(FlatcalcError::Calc(CalcError::InvalidRange { .. }))
        ));
    }
}
