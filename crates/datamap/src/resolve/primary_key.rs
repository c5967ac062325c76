use crate::{
    ConfigError,
    class::ClassDef,
    marker::PrimaryKeyMarker,
    metadata::PrimaryKeyMetadata,
    reader::MarkerReader,
};

/// Exactly one property must carry the primary-key marker; zero or more
/// than one is a configuration error.
pub fn resolve(class: &'static ClassDef) -> Result<PrimaryKeyMetadata, ConfigError> {
    let mut found: Option<(&'static str, &'static PrimaryKeyMarker)> = None;

    for property in class.properties {
        let Some(marker) = MarkerReader::read::<PrimaryKeyMarker>(property) else {
            continue;
        };

        if let Some((first, _)) = found {
            return Err(ConfigError::MultiplePrimaryKeys {
                class: class.def.path(),
                first,
                second: property.ident,
            });
        }

        found = Some((property.ident, marker));
    }

    let Some((property, marker)) = found else {
        return Err(ConfigError::MissingPrimaryKey {
            class: class.def.path(),
        });
    };

    Ok(PrimaryKeyMetadata {
        property,
        auto_increment: marker.auto_increment,
    })
}
