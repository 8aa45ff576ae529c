pub mod nullable_datetime {
    use {
        serde::{
            de::Error,
            ser,
            Deserialize,
            Deserializer,
            Serializer,
        },
        time::{
            format_description::well_known::Rfc3339,
            OffsetDateTime,
        },
    };

    pub fn serialize<S>(value: &Option<OffsetDateTime>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => {
                let formatted = value.format(&Rfc3339).map_err(ser::Error::custom)?;
                s.serialize_str(formatted.as_str())
            }
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Deserialize::deserialize(d)?;
        match s {
            Some(s) => OffsetDateTime::parse(s.as_str(), &Rfc3339)
                .map(Some)
                .map_err(|err| D::Error::custom(err.to_string())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        serde::{
            Deserialize,
            Serialize,
        },
        time::macros::datetime,
    };

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Timed {
        #[serde(default, with = "super::nullable_datetime")]
        at: Option<time::OffsetDateTime>,
    }

    #[test]
    fn test_missing_datetime_is_none() {
        let timed: Timed = serde_json::from_str("{}").unwrap();
        assert_eq!(timed, Timed { at: None });
        let timed: Timed = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(timed, Timed { at: None });
    }

    #[test]
    fn test_datetime_is_rfc3339() {
        let timed = Timed {
            at: Some(datetime!(2024-05-23 21:26:57 UTC)),
        };
        let json = serde_json::to_string(&timed).unwrap();
        assert_eq!(json, r#"{"at":"2024-05-23T21:26:57Z"}"#);
        assert_eq!(serde_json::from_str::<Timed>(&json).unwrap(), timed);
    }

    #[test]
    fn test_invalid_datetime_is_rejected() {
        assert!(serde_json::from_str::<Timed>(r#"{"at": "yesterday"}"#).is_err());
    }
}
