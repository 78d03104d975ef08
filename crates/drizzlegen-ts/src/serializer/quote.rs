use super::{Formatter, ToTs};

/// A single-quoted string literal.
pub(super) struct Quoted<S>(pub(super) S);

/// Raw SQL inside a `sql` tagged template.
pub(super) struct SqlTemplate<S>(pub(super) S);

impl<S: AsRef<str>> ToTs for Quoted<S> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        // Writing into a `String` cannot fail.
        let _ = crate::literal::write_quoted(&mut *f.dst, self.0.as_ref());
    }
}

impl<S: AsRef<str>> ToTs for SqlTemplate<S> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str("sql`");
        f.dst.push_str(&escape_template(self.0.as_ref()));
        f.dst.push('`');
    }
}

/// Escapes `s` for the body of a template string.
pub(crate) fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
