//! Binding [`GeometryValue`](crate::value::GeometryValue) to PostGIS `geometry` columns through
//! [`sqlx`].

mod value;
