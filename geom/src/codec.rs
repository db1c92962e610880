//! The wire encoding of [`Vector2`]: a bare two-element array `[x, y]`, without field names or type information.

use std::fmt::Formatter;
use std::marker::PhantomData;

use serde::de::{Error, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Vector2;

impl<T> Serialize for Vector2<T> where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ser = serializer.serialize_tuple(2)?;
        ser.serialize_element(&self.x)?;
        ser.serialize_element(&self.y)?;
        ser.end()
    }
}

struct Vector2Visitor<T> {
    marker: PhantomData<fn() -> Vector2<T>>,
}

impl<T> Vector2Visitor<T> {
    fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for Vector2Visitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Vector2<T>;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("an array of two components")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let x = seq
            .next_element()?
            .ok_or_else(|| Error::invalid_length(0, &self))?;
        let y = seq
            .next_element()?
            .ok_or_else(|| Error::invalid_length(1, &self))?;

        // The array must end here
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(Error::invalid_length(3, &self));
        }

        Ok(Vector2::new(x, y))
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, Vector2Visitor::new())
    }
}

#[cfg(test)]
mod test_codec {
    use crate::Vector2;

    #[test]
    fn test_deserialize() {
        let vector: Vector2<i32> = serde_json::from_str("[3, -4]").unwrap();
        assert_eq!(3, vector.x);
        assert_eq!(-4, vector.y);
    }

    #[test]
    fn test_deserialize_embedded() {
        let vectors: Vec<Vector2<i32>> = serde_json::from_str("[[0, 0], [1, 2], [-5, 7]]").unwrap();
        assert_eq!(vec![Vector2::new(0, 0), Vector2::new(1, 2), Vector2::new(-5, 7)], vectors);
    }

    #[test]
    fn test_deserialize_malformed() {
        for json in ["[3]", "[]", "[1, 2, 3]", "[1.5, 2]", "[1, \"2\"]", "{\"x\": 1, \"y\": 2}", "3", "[1, 2"] {
            let result = serde_json::from_str::<Vector2<i32>>(json);
            assert!(result.is_err(), "Decoding {} should have failed, but got {:?}.", json, result);
        }
    }

    #[test]
    fn test_deserialize_out_of_range() {
        assert!(serde_json::from_str::<Vector2<i32>>("[2147483648, 0]").is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!("[3,-4]", serde_json::to_string(&Vector2::new(3, -4)).unwrap());
        assert_eq!("[0.5,-1.0]", serde_json::to_string(&Vector2::new(0.5, -1.0)).unwrap());
    }

    #[test]
    fn test_round_trip_json() {
        let vector = Vector2::new(i32::MIN, i32::MAX);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(vector, serde_json::from_str::<Vector2<i32>>(&json).unwrap());
    }

    #[test]
    fn test_round_trip_bincode() {
        let vector = Vector2::new(-17, 42);
        let data = bincode::serialize(&vector).unwrap();
        assert_eq!(8, data.len());
        assert_eq!(vector, bincode::deserialize::<Vector2<i32>>(&data).unwrap());
    }

    #[test]
    fn test_bincode_truncated() {
        let data = bincode::serialize(&Vector2::new(1, 2)).unwrap();
        assert!(bincode::deserialize::<Vector2<i32>>(&data[..6]).is_err());
    }
}
