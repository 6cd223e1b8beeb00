#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
    seq: u64,
}

impl Dialog {
    pub fn new(title: impl Into<String>, body: impl Into<String>, seq: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            seq,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}
