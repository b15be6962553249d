use geozero::ColumnValue;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueFormat, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

use crate::geo_traits::GeometryVariant;
use crate::value::GeometryValue;

impl<G: GeometryVariant> Type<Postgres> for GeometryValue<G> {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("geometry")
    }
}

/// PostGIS sends EWKB over the binary protocol and hex EWKB over the text protocol.
fn decode_column<G: GeometryVariant>(
    format: PgValueFormat,
    bytes: &[u8],
) -> Result<GeometryValue<G>, BoxDynError> {
    let raw = match format {
        PgValueFormat::Binary => ColumnValue::Binary(bytes),
        PgValueFormat::Text => ColumnValue::String(std::str::from_utf8(bytes)?),
    };
    let mut geom = GeometryValue::null();
    geom.decode(Some(raw))?;
    Ok(geom)
}

impl<'r, G: GeometryVariant> Decode<'r, Postgres> for GeometryValue<G> {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        decode_column(value.format(), value.as_bytes()?)
    }
}

impl<'q, G: GeometryVariant> Encode<'q, Postgres> for GeometryValue<G> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self.encode_bytes()? {
            Some(ewkb) => {
                buf.extend_from_slice(&ewkb);
                Ok(IsNull::No)
            }
            None => Ok(IsNull::Yes),
        }
    }
}

#[cfg(test)]
mod test {
    use sqlx::TypeInfo;

    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::{Point, Polygon};
    use crate::value::{AnyGeometryValue, PointValue};

    #[test]
    fn geometry_type_info() {
        assert_eq!(PointValue::type_info().name(), "geometry");
        assert_eq!(AnyGeometryValue::type_info().name(), "geometry");
    }

    #[test]
    fn encode_writes_ewkb() {
        let value = GeometryValue::new(Point::new(42., 42.));
        let mut buf = PgArgumentBuffer::default();
        let is_null = Encode::<Postgres>::encode_by_ref(&value, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&buf[..], &value.encode_bytes().unwrap().unwrap()[..]);
    }

    const POINT_42_42: &str = "0101000020e610000000000000000045400000000000004540";

    #[test]
    fn decode_text_format() {
        let value: PointValue =
            decode_column(PgValueFormat::Text, POINT_42_42.to_uppercase().as_bytes()).unwrap();
        assert_eq!(value.geometry(), Some(&Point::new(42., 42.)));
        assert_eq!(value.srid(), Some(4326));
    }

    #[test]
    fn decode_binary_format() {
        let ewkb = hex::decode(POINT_42_42).unwrap();
        let value: AnyGeometryValue = decode_column(PgValueFormat::Binary, &ewkb).unwrap();
        assert_eq!(value.geometry(), Some(&Point::new(42., 42.).into()));

        // the same bytes are not valid hex text
        assert!(decode_column::<Point>(PgValueFormat::Text, &ewkb).is_err());
    }

    #[test]
    fn decode_propagates_type_mismatch() {
        let err = decode_column::<Polygon>(PgValueFormat::Text, POINT_42_42.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeometryError>(),
            Some(GeometryError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn encode_null() {
        let mut buf = PgArgumentBuffer::default();
        let is_null = Encode::<Postgres>::encode_by_ref(&PointValue::null(), &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(buf.is_empty());
    }
}
