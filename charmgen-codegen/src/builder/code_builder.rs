//! Line-oriented source builder.

use super::align_columns;

/// Builds tab-indented source one line at a time.
///
/// Every method consumes and returns the builder so renderers can thread it
/// through a chain or a fold.
///
/// ```
/// use charmgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .block("type Config struct {", "}", |b| b.line("Port int"))
///     .build();
///
/// assert_eq!(code, "type Config struct {\n\tPort int\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    /// An empty builder at depth zero.
    pub fn go() -> Self {
        Self::default()
    }

    /// Append `s` at the current depth.
    pub fn line(mut self, s: &str) -> Self {
        self.buffer.extend(std::iter::repeat_n('\t', self.depth));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line. Blank lines are never indented.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.depth += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append a `//` line comment.
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("// {}", text))
    }

    /// Append rows of cells with their columns aligned.
    pub fn aligned<S: AsRef<str>>(self, rows: &[Vec<S>]) -> Self {
        align_columns(rows)
            .iter()
            .fold(self, |b, line| b.line(line))
    }

    /// Append `header`, the body one level deeper, then `close`.
    pub fn block<F>(self, header: &str, close: &str, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        body(self.line(header).indent()).dedent().line(close)
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::go()
            .line("func (i S3Integration) IsOptional() bool {")
            .indent()
            .line("return false")
            .dedent()
            .line("}")
            .build();

        assert_eq!(
            code,
            "func (i S3Integration) IsOptional() bool {\n\treturn false\n}\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::go().dedent().line("package config").build();
        assert_eq!(code, "package config\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::go()
            .indent()
            .line("A int")
            .blank()
            .line("Embedded")
            .build();

        assert_eq!(code, "\tA int\n\n\tEmbedded\n");
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::go()
            .indent()
            .comment("IsActive reports whether the integration data is available.")
            .build();
        assert_eq!(
            code,
            "\t// IsActive reports whether the integration data is available.\n"
        );
    }

    #[test]
    fn test_when_and_each() {
        let code = CodeBuilder::go()
            .when(false, |b| b.line("type DatabaseIntegration struct{}"))
            .each(["MySQL", "Redis"], |b, name| {
                b.line(&format!("type {}Integration struct{{}}", name))
            })
            .build();

        assert_eq!(
            code,
            "type MySQLIntegration struct{}\ntype RedisIntegration struct{}\n"
        );
    }

    #[test]
    fn test_aligned_block() {
        let code = CodeBuilder::go()
            .block("type ProxyConfig struct {", "}", |b| {
                b.aligned(&[
                    vec!["HTTPProxy", "*string", "`env:\"HTTP_PROXY\"`"],
                    vec!["NoProxy", "[]string", "`env:\"NO_PROXY\"`"],
                ])
            })
            .build();

        assert_eq!(
            code,
            "type ProxyConfig struct {\n\tHTTPProxy *string  `env:\"HTTP_PROXY\"`\n\tNoProxy   []string `env:\"NO_PROXY\"`\n}\n"
        );
    }
}
