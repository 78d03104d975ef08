use super::{Options, Serializer};

use crate::dialect::{Dialect, Mysql, Postgresql, Sqlite};

use drizzlegen_core::{Provider, Schema};

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Flavor {
    pub(super) fn dialect(self) -> &'static dyn Dialect {
        match self {
            Flavor::Postgresql => &Postgresql,
            Flavor::Sqlite => &Sqlite,
            Flavor::Mysql => &Mysql,
        }
    }
}

impl<'a> Serializer<'a> {
    pub fn sqlite(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Sqlite,
            options: Options::default(),
        }
    }

    pub fn postgresql(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Postgresql,
            options: Options::default(),
        }
    }

    pub fn mysql(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Mysql,
            options: Options::default(),
        }
    }

    pub fn for_provider(provider: Provider, schema: &'a Schema) -> Serializer<'a> {
        match provider {
            Provider::Postgresql => Serializer::postgresql(schema),
            Provider::Mysql => Serializer::mysql(schema),
            Provider::Sqlite => Serializer::sqlite(schema),
        }
    }
}
