pub trait ToDashSeparators {
    /// Trimmed copy with `/` and `.` date separators turned into `-`.
    fn to_dash_separators(&self) -> String;
}

impl<S: AsRef<str> + ?Sized> ToDashSeparators for S {
    fn to_dash_separators(&self) -> String {
        self.as_ref().trim().replace(['/', '.'], "-")
    }
}
