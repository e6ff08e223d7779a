//! Static provider schema registry
//!
//! Each known provider type maps to the list of fields the add/edit form
//! shows for it. Providers that only need OAuth (or nothing at all) have an
//! empty field list; unknown types resolve to an empty list too.

use crate::types::{Parameters, RemoteConfig};

/// How a field is edited and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Masked on screen.
    Secret,
    /// One of `FieldDescriptor::options`.
    Choice,
    /// Free text that must parse as a number.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub default_value: Option<&'static str>,
    pub options: &'static [ChoiceOption],
}

impl FieldDescriptor {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            placeholder: None,
            default_value: None,
            options: &[],
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn default_value(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }

    const fn options(mut self, options: &'static [ChoiceOption]) -> Self {
        self.options = options;
        self
    }

    /// Label of the option with the given value, if any.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSchema {
    pub provider_type: &'static str,
    pub label: &'static str,
    pub fields: &'static [FieldDescriptor],
}

const fn opt(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

// ─────────────────────────────────────────────────────────────────
// Field tables
// ─────────────────────────────────────────────────────────────────

const WEBDAV_VENDORS: &[ChoiceOption] = &[
    opt("other", "Other"),
    opt("nextcloud", "Nextcloud"),
    opt("owncloud", "ownCloud"),
    opt("sharepoint", "SharePoint"),
    opt("fastmail", "Fastmail"),
];

const WEBDAV_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("url", "URL", FieldKind::Text)
        .required()
        .placeholder("https://example.com/webdav"),
    FieldDescriptor::new("vendor", "Vendor", FieldKind::Choice)
        .default_value("other")
        .options(WEBDAV_VENDORS),
    FieldDescriptor::new("user", "Username", FieldKind::Text).required(),
    FieldDescriptor::new("pass", "Password", FieldKind::Secret).required(),
    FieldDescriptor::new("bearer_token", "Bearer token", FieldKind::Secret)
        .placeholder("optional"),
];

const FTP_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("host", "Host", FieldKind::Text)
        .required()
        .placeholder("ftp.example.com"),
    FieldDescriptor::new("user", "Username", FieldKind::Text).default_value("anonymous"),
    FieldDescriptor::new("pass", "Password", FieldKind::Secret),
    FieldDescriptor::new("port", "Port", FieldKind::Number).default_value("21"),
];

const SFTP_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("host", "Host", FieldKind::Text)
        .required()
        .placeholder("sftp.example.com"),
    FieldDescriptor::new("user", "Username", FieldKind::Text).required(),
    FieldDescriptor::new("pass", "Password", FieldKind::Secret),
    FieldDescriptor::new("port", "Port", FieldKind::Number).default_value("22"),
    FieldDescriptor::new("key_file", "Private key file", FieldKind::Text)
        .placeholder("~/.ssh/id_rsa"),
];

const S3_PROVIDERS: &[ChoiceOption] = &[
    opt("AWS", "Amazon S3"),
    opt("Alibaba", "Alibaba Cloud OSS"),
    opt("Minio", "MinIO"),
    opt("DigitalOcean", "DigitalOcean Spaces"),
];

const S3_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("provider", "Provider", FieldKind::Choice)
        .required()
        .default_value("AWS")
        .options(S3_PROVIDERS),
    FieldDescriptor::new("access_key_id", "Access key ID", FieldKind::Text).required(),
    FieldDescriptor::new("secret_access_key", "Secret access key", FieldKind::Secret).required(),
    FieldDescriptor::new("region", "Region", FieldKind::Text).default_value("us-east-1"),
    FieldDescriptor::new("endpoint", "Endpoint", FieldKind::Text)
        .placeholder("leave empty for AWS"),
];

const DRIVE_SCOPES: &[ChoiceOption] = &[
    opt("drive", "Full access"),
    opt("drive.readonly", "Read-only access"),
    opt("drive.file", "File access only"),
];

const DRIVE_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "scope",
    "Scope",
    FieldKind::Choice,
)
.default_value("drive")
.options(DRIVE_SCOPES)];

const HTTP_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "url",
    "Base URL",
    FieldKind::Text,
)
.required()
.placeholder("https://example.com/files/")];

/// Every provider the form knows about, in selector order.
pub const PROVIDER_SCHEMAS: &[ProviderSchema] = &[
    ProviderSchema {
        provider_type: "webdav",
        label: "WebDAV",
        fields: WEBDAV_FIELDS,
    },
    ProviderSchema {
        provider_type: "ftp",
        label: "FTP",
        fields: FTP_FIELDS,
    },
    ProviderSchema {
        provider_type: "sftp",
        label: "SFTP",
        fields: SFTP_FIELDS,
    },
    ProviderSchema {
        provider_type: "s3",
        label: "S3",
        fields: S3_FIELDS,
    },
    ProviderSchema {
        provider_type: "drive",
        label: "Google Drive",
        fields: DRIVE_FIELDS,
    },
    ProviderSchema {
        provider_type: "dropbox",
        label: "Dropbox",
        fields: &[],
    },
    ProviderSchema {
        provider_type: "onedrive",
        label: "OneDrive",
        fields: &[],
    },
    ProviderSchema {
        provider_type: "box",
        label: "Box",
        fields: &[],
    },
    ProviderSchema {
        provider_type: "local",
        label: "Local",
        fields: &[],
    },
    ProviderSchema {
        provider_type: "http",
        label: "HTTP",
        fields: HTTP_FIELDS,
    },
];

// ─────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────

pub fn find_schema(provider_type: &str) -> Option<&'static ProviderSchema> {
    PROVIDER_SCHEMAS
        .iter()
        .find(|s| s.provider_type.eq_ignore_ascii_case(provider_type))
}

/// Field list for a provider type. Empty for unknown types.
pub fn resolve_schema(provider_type: &str) -> &'static [FieldDescriptor] {
    find_schema(provider_type)
        .map(|s| s.fields)
        .unwrap_or(&[])
}

/// Human label for a provider type, falling back to the raw type name.
pub fn provider_label(provider_type: &str) -> String {
    find_schema(provider_type)
        .map(|s| s.label.to_string())
        .unwrap_or_else(|| provider_type.to_string())
}

/// Parameter map holding exactly the fields that carry a default value.
pub fn default_parameters(provider_type: &str) -> Parameters {
    resolve_schema(provider_type)
        .iter()
        .filter_map(|f| f.default_value.map(|v| (f.key.to_string(), v.to_string())))
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Card key-info
// ─────────────────────────────────────────────────────────────────

const MAX_KEY_INFO: usize = 2;

/// Up to two `(label, value)` pairs summarizing a remote on its card.
pub fn key_info(remote: &RemoteConfig) -> Vec<(&'static str, String)> {
    let candidates: &[(&str, &'static str)] = match remote.provider_type.to_lowercase().as_str() {
        "webdav" => &[("url", "URL"), ("vendor", "Vendor")],
        "ftp" | "sftp" => &[("host", "Host"), ("user", "User")],
        "s3" => &[("provider", "Provider"), ("region", "Region")],
        "drive" | "dropbox" | "onedrive" | "box" => &[("scope", "Scope")],
        "http" => &[("url", "URL")],
        _ => &[("url", "URL"), ("host", "Host"), ("endpoint", "Endpoint")],
    };

    candidates
        .iter()
        .filter_map(|(key, label)| remote.param_text(key).map(|value| (*label, value)))
        .take(MAX_KEY_INFO)
        .collect()
}
