use anyhow::Result;

/// Something that can hand back the whole review corpus as UTF-8 text.
pub trait CorpusSource {
    fn read_corpus(&self) -> Result<String>;

    /// Human-readable location, used in log events.
    fn describe(&self) -> String;
}

impl<S: CorpusSource + ?Sized> CorpusSource for Box<S> {
    fn read_corpus(&self) -> Result<String> {
        (**self).read_corpus()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: CorpusSource + ?Sized> CorpusSource for &S {
    fn read_corpus(&self) -> Result<String> {
        (**self).read_corpus()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
