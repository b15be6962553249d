//! [`GeometryValue`], the typed geometry a persistence layer reads from and writes to a
//! `geometry` column.

use std::fmt;
use std::str::FromStr;

use geozero::ColumnValue;
use log::{debug, warn};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::datatypes::{type_descriptor, DEFAULT_SRID};
use crate::error::{GeometryError, Result};
use crate::geo_traits::GeometryVariant;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::io::wkb::{from_ewkb, to_ewkb};
use crate::io::wkt::ToWkt;

const CANNOT_MARSHAL: &str = "cannot marshal geometry";

/// Settings shared by the geometry values of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EwkbOptions {
    /// SRID written for geometries that do not carry their own, and reported in column types.
    pub default_srid: i32,
}

impl Default for EwkbOptions {
    fn default() -> Self {
        Self {
            default_srid: DEFAULT_SRID,
        }
    }
}

/// A geometry of statically known kind, or NULL, as stored in a `geometry` column.
///
/// `G` is one of the seven kind-specific geometry structs, or [`Geometry`] for a column that
/// accepts any kind. Decoding a geometry of another kind into a value declared for `G` fails
/// with [`GeometryError::TypeMismatch`].
///
/// ```
/// use geo_ewkb::geometry::Point;
/// use geo_ewkb::value::GeometryValue;
///
/// let value = GeometryValue::new(Point::new(42., 42.));
/// assert_eq!(
///     value.encode().unwrap().as_deref(),
///     Some("0101000020e610000000000000000045400000000000004540")
/// );
/// assert_eq!(value.to_string(), "POINT (42 42)");
/// assert_eq!(value.type_descriptor(), "Geometry(Point, 4326)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryValue<G = Geometry> {
    geom: Option<G>,
    srid: Option<i32>,
    default_srid: i32,
}

pub type PointValue = GeometryValue<Point>;
pub type LineStringValue = GeometryValue<LineString>;
pub type PolygonValue = GeometryValue<Polygon>;
pub type MultiPointValue = GeometryValue<MultiPoint>;
pub type MultiLineStringValue = GeometryValue<MultiLineString>;
pub type MultiPolygonValue = GeometryValue<MultiPolygon>;
pub type GeometryCollectionValue = GeometryValue<GeometryCollection>;
/// A value for an unconstrained `geometry` column
pub type AnyGeometryValue = GeometryValue<Geometry>;

impl<G: GeometryVariant> GeometryValue<G> {
    /// A value holding `geom`, without an SRID of its own.
    pub fn new(geom: G) -> Self {
        Self {
            geom: Some(geom),
            srid: None,
            default_srid: DEFAULT_SRID,
        }
    }

    /// A NULL value.
    pub fn null() -> Self {
        Self {
            geom: None,
            srid: None,
            default_srid: DEFAULT_SRID,
        }
    }

    /// Set the SRID of the held geometry.
    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = Some(srid);
        self
    }

    /// Set the SRID used when the geometry has none, and in [`type_descriptor`](Self::type_descriptor).
    pub fn with_default_srid(mut self, default_srid: i32) -> Self {
        self.default_srid = default_srid;
        self
    }

    pub fn with_options(self, options: &EwkbOptions) -> Self {
        self.with_default_srid(options.default_srid)
    }

    pub fn geometry(&self) -> Option<&G> {
        self.geom.as_ref()
    }

    pub fn into_inner(self) -> Option<G> {
        self.geom
    }

    /// The geometry's own SRID, if it has one.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn default_srid(&self) -> i32 {
        self.default_srid
    }

    /// The SRID that [`encode`](Self::encode) writes.
    pub fn effective_srid(&self) -> i32 {
        self.srid.unwrap_or(self.default_srid)
    }

    pub fn is_null(&self) -> bool {
        self.geom.is_none()
    }

    /// Load a column value read from the database.
    ///
    /// `None` is SQL NULL and clears the value. Text is hex-encoded EWKB in either case; bytes
    /// are raw EWKB. Any other kind of column value is rejected. On error the value is left
    /// unchanged.
    pub fn decode(&mut self, raw: Option<ColumnValue<'_>>) -> Result<()> {
        match raw {
            None => {
                debug!("decoded NULL geometry");
                self.geom = None;
                self.srid = None;
                Ok(())
            }
            Some(ColumnValue::String(hex_ewkb)) => self.decode_bytes(&hex::decode(hex_ewkb)?),
            Some(ColumnValue::Binary(ewkb)) => self.decode_bytes(ewkb),
            Some(other) => Err(GeometryError::UnsupportedInputKind(format!("{other:?}"))),
        }
    }

    /// Load raw EWKB bytes.
    pub fn decode_bytes(&mut self, ewkb: &[u8]) -> Result<()> {
        let (geom, srid) = from_ewkb(ewkb)?;
        let geom = G::try_from_geometry(geom)?;
        debug!(
            "decoded {} from {} bytes, srid {:?}",
            geom.kind(),
            ewkb.len(),
            srid
        );
        self.geom = Some(geom);
        self.srid = srid;
        Ok(())
    }

    /// The value to bind for this geometry: lowercase hex EWKB, or `None` for NULL.
    pub fn encode(&self) -> Result<Option<String>> {
        Ok(self.encode_bytes()?.map(hex::encode))
    }

    /// Like [`encode`](Self::encode), without the hex step, for drivers speaking a binary
    /// protocol.
    pub fn encode_bytes(&self) -> Result<Option<Vec<u8>>> {
        let Some(geom) = &self.geom else {
            return Ok(None);
        };
        let srid = self.effective_srid();
        let ewkb = to_ewkb(geom, srid)?;
        debug!(
            "encoded {} as {} bytes, srid {}",
            geom.kind(),
            ewkb.len(),
            srid
        );
        Ok(Some(ewkb))
    }

    /// The column type for values of this kind, e.g. `Geometry(Polygon, 4326)`.
    ///
    /// Values declared for [`Geometry`] describe an unconstrained `geometry` column.
    pub fn type_descriptor(&self) -> String {
        Self::column_type(self.default_srid)
    }

    /// [`type_descriptor`](Self::type_descriptor) without an instance.
    pub fn column_type(default_srid: i32) -> String {
        type_descriptor(G::KIND, default_srid)
    }

    /// The WKT form of the geometry.
    ///
    /// Never fails: when the geometry cannot be rendered, or is NULL, a diagnostic naming the
    /// kind (or `absent`) is returned instead.
    pub fn text_form(&self) -> String {
        match &self.geom {
            Some(geom) => geom.to_wkt().unwrap_or_else(|err| {
                warn!("{CANNOT_MARSHAL}: {err}");
                format!("{CANNOT_MARSHAL}: {}", geom.kind())
            }),
            None => format!("{CANNOT_MARSHAL}: absent"),
        }
    }
}

impl<G: GeometryVariant> Default for GeometryValue<G> {
    fn default() -> Self {
        Self::null()
    }
}

impl<G: GeometryVariant> From<G> for GeometryValue<G> {
    fn from(value: G) -> Self {
        Self::new(value)
    }
}

impl<G: GeometryVariant> fmt::Display for GeometryValue<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_form())
    }
}

/// Parses hex-encoded EWKB.
impl<G: GeometryVariant> FromStr for GeometryValue<G> {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let mut value = Self::null();
        value.decode(Some(ColumnValue::String(s)))?;
        Ok(value)
    }
}

/// Serializes as the hex EWKB string that [`encode`](GeometryValue::encode) returns, or as
/// `null`.
impl<G: GeometryVariant> Serialize for GeometryValue<G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.encode().map_err(S::Error::custom)? {
            Some(hex_ewkb) => serializer.serialize_some(&hex_ewkb),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, G: GeometryVariant> Deserialize<'de> for GeometryValue<G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex_ewkb = Option::<String>::deserialize(deserializer)?;
        let mut value = Self::null();
        value
            .decode(hex_ewkb.as_deref().map(ColumnValue::String))
            .map_err(D::Error::custom)?;
        Ok(value)
    }
}
