use super::Formatter;

use crate::Literal;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_ts($f);
        )*
    }};
}

pub(super) trait ToTs {
    fn to_ts(self, f: &mut Formatter<'_>);
}

impl ToTs for &str {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToTs for &String {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToTs for String {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self);
    }
}

impl ToTs for &Literal {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}

impl<T: ToTs> ToTs for Option<T> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        if let Some(fragment) = self {
            fragment.to_ts(f);
        }
    }
}
