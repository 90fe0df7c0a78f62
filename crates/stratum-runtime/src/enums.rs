///
/// EnumValue
///
/// Mapping between a generated enum and its underlying string value on the
/// wire. `from_value` is lenient: an unrecognized raw value is None, which
/// ingestion stores as a null enum rather than failing.
///

pub trait EnumValue: Sized {
    fn as_value(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self>;
}
