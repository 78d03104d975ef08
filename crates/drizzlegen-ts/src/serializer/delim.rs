use super::{Formatter, ToTs};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToTs for Comma<L>
where
    L: IntoIterator,
    L::Item: ToTs,
{
    fn to_ts(self, f: &mut Formatter<'_>) {
        Delimited(self.0, ", ").to_ts(f);
    }
}

impl<L> ToTs for Period<L>
where
    L: IntoIterator,
    L::Item: ToTs,
{
    fn to_ts(self, f: &mut Formatter<'_>) {
        Delimited(self.0, ".").to_ts(f);
    }
}

impl<L> ToTs for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToTs,
{
    fn to_ts(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}
