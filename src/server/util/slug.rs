use sha2::{Digest, Sha256};

/// Reduces a name to its lower-cased alphanumerics, e.g. "Acme U" -> "acmeu".
///
/// Non-ASCII letters and digits are kept. A name with none at all falls back to `org`
/// followed by a short hash of the name, so the slug is never empty and distinct names
/// rarely share one.
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if !slug.is_empty() {
        return slug;
    }

    let digest = Sha256::digest(name.trim().to_lowercase().as_bytes());
    let suffix: String = digest[..4].iter().map(|b| format!("{:02x}", b)).collect();

    format!("org{}", suffix)
}

/// Email address of an organization's generated admin account.
pub fn admin_email(organization_name: &str) -> String {
    format!("admin@{}.com", slugify(organization_name))
}
