use serde::{Deserialize, Deserializer, Serialize};

/// A course offered in the catalogue.
///
/// Missing JSON fields decode to their defaults so that validation, not the
/// decoder, decides whether a payload is acceptable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    /// Unique identifier, assigned by the service on creation
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Each course owns its author; `null` decodes to an empty one
    #[serde(deserialize_with = "null_as_default")]
    pub author: Author,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub fullname: String,
    /// Author homepage, not validated
    pub website: String,
}

impl Course {
    /// A course without a name carries no usable data.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Courses loaded at startup when seeding is enabled.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "Rust Fundamentals".to_string(),
            price: 299.0,
            author: Author {
                fullname: "Ada Byron".to_string(),
                website: "https://ada.example.com".to_string(),
            },
        },
        Course {
            id: "2".to_string(),
            name: "Async Services with Tokio".to_string(),
            price: 199.0,
            author: Author {
                fullname: "Grace Hopper".to_string(),
                website: "https://grace.example.com".to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_decides_emptiness() {
        let mut course = Course {
            id: "co123".to_string(),
            ..Course::default()
        };
        assert!(course.is_empty());

        course.name = "Go Basics".to_string();
        assert!(!course.is_empty());
    }

    #[test]
    fn decodes_wire_format() {
        let course: Course = serde_json::from_str(
            r#"{"id":"7","name":"Go Basics","price":9.99,"author":{"fullname":"A","website":"https://a.com"}}"#,
        )
        .unwrap();

        assert_eq!(course.id, "7");
        assert_eq!(course.price, 9.99);
        assert_eq!(course.author.website, "https://a.com");
        assert_eq!(
            serde_json::from_value::<Course>(serde_json::to_value(&course).unwrap()).unwrap(),
            course
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let course: Course = serde_json::from_str(r#"{"price": 5}"#).unwrap();
        assert!(course.id.is_empty());
        assert!(course.is_empty());
        assert_eq!(course.author, Author::default());
    }

    #[test]
    fn null_author_decodes_to_empty_author() {
        let course: Course =
            serde_json::from_str(r#"{"name":"Go Basics","price":9.99,"author":null}"#).unwrap();
        assert_eq!(course.author, Author::default());
        assert_eq!(course.name, "Go Basics");
    }

    #[test]
    fn seeds_have_fixed_ids() {
        let ids: Vec<_> = seed_courses().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
