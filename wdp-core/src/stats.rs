use crate::policy::Decision;

/// What one pack run did. `declared` is the header count, which can exceed
/// the number of image entries actually written when sources were skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackReport {
    pub declared: i32,
    pub raw_copied: usize,
    pub re_encoded: usize,
    pub skipped: Vec<String>,
}

impl PackReport {
    pub fn new(declared: i32) -> Self {
        Self {
            declared,
            ..Default::default()
        }
    }

    pub fn record(&mut self, decision: Decision) {
        match decision {
            Decision::CopyRaw => self.raw_copied += 1,
            Decision::ReEncode => self.re_encoded += 1,
        }
    }

    pub fn written(&self) -> usize {
        self.raw_copied + self.re_encoded
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackOutcome {
    /// Nothing to pack; no container was created.
    NoInput,
    Packed(PackReport),
}

impl PackOutcome {
    pub fn report(&self) -> Option<&PackReport> {
        match self {
            PackOutcome::NoInput => None,
            PackOutcome::Packed(r) => Some(r),
        }
    }
}
