use super::{Comma, Formatter, Quoted, ToTs};

use crate::stmt::EnumDecl;

impl ToTs for &EnumDecl {
    fn to_ts(self, f: &mut Formatter<'_>) {
        let values = Comma(self.values.iter().map(Quoted));

        fmt!(
            f, "export const " self.symbol.as_str() " = " self.ctor "(" Quoted(&self.db_name)
            ", [" values "])"
        );
    }
}
