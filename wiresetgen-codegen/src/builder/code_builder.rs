//! Code builder utility for generating properly indented code.

/// One indent level, as produced by `gofmt`.
const INDENT: &str = "\t";

/// Fluent API for building code with tab indentation.
///
/// # Example
///
/// ```
/// use wiresetgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("func main() {")
///     .indent()
///     .line("run()")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\trun()\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty CodeBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use wiresetgen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::new()
    ///     .block_with_close("import (", ")", |b| b.line("\"fmt\""))
    ///     .build();
    ///
    /// assert_eq!(code, "import (\n\t\"fmt\"\n)\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a line comment (`// text`).
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("// {}", text))
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("package wire").build();
        assert_eq!(code, "package wire\n");
    }

    #[test]
    fn test_block_uses_tabs() {
        let code = CodeBuilder::new()
            .block_with_close("var Set = wire.NewSet(", ")", |b| b.line("repo.New,"))
            .build();

        assert_eq!(code, "var Set = wire.NewSet(\n\trepo.New,\n)\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::new()
            .indent()
            .line("a")
            .blank()
            .line("b")
            .build();

        assert_eq!(code, "\ta\n\n\tb\n");
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::new().comment("Code generated. DO NOT EDIT.").build();
        assert_eq!(code, "// Code generated. DO NOT EDIT.\n");
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::new().when(true, |b| b.line("x")).build();
        let without = CodeBuilder::new().when(false, |b| b.line("x")).build();

        assert_eq!(with, "x\n");
        assert_eq!(without, "");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .each(["a", "b"], |b, item| b.line(item))
            .build();

        assert_eq!(code, "a\nb\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::new()
            .dedent()
            .line("x")
            .build();

        assert_eq!(code, "x\n");
    }
}
