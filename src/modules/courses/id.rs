use rand::Rng;

/// Letters a generated id is drawn from.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const COURSE_ID_PREFIX: &str = "co";
pub const COURSE_ID_LENGTH: usize = 10;

/// `prefix` followed by `length` letters picked uniformly at random.
///
/// Not cryptographic and not checked for collisions.
pub fn generate_id(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::with_capacity(prefix.len() + length);
    id.push_str(prefix);
    id.extend((0..length).map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char));
    id
}

/// Fresh id for a newly created course.
pub fn course_id() -> String {
    generate_id(COURSE_ID_PREFIX, COURSE_ID_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_is_52_letters() {
        assert_eq!(CHARSET.len(), 52);
        assert!(CHARSET.iter().all(u8::is_ascii_alphabetic));
    }

    #[test]
    fn course_ids_have_prefix_and_length() {
        for _ in 0..100 {
            let id = course_id();
            assert!(id.starts_with("co"));
            assert_eq!(id.len(), 12);
            assert!(id[2..].chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn honours_custom_prefix_and_length() {
        assert_eq!(generate_id("", 0), "");
        let id = generate_id("usr-", 3);
        assert!(id.starts_with("usr-"));
        assert_eq!(id.len(), 7);
    }
}
