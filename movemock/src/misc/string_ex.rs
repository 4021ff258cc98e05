pub trait StringEx {
    /// First character upper-cased, the rest unchanged.
    fn capitalizing_first_letter(&self) -> String;
}

impl StringEx for str {
    fn capitalizing_first_letter(&self) -> String {
        let mut chars = self.chars();

        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
