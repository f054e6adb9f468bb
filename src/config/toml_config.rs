use crate::adapters::credentials::{
    SharedSecretVerifier, DEFAULT_ADMIN_SECRET, DEFAULT_IDENTITY_PHRASE,
};
use crate::adapters::registry::{default_members, InMemoryRegistry};
use crate::core::catalog::{default_profile, TierCatalog};
use crate::core::engine::MembershipEngine;
use crate::core::{MemberEntry, Tier, TierProfile};
use crate::utils::error::{MembershipError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_range, validate_unique,
    validate_username, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file configuration. Every section falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembershipConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    pub members: Option<Vec<MemberEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub platinum: Option<TierOverride>,
    pub gold: Option<TierOverride>,
    pub silver: Option<TierOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierOverride {
    pub discount: Option<f64>,
    pub reference_expense: Option<f64>,
    pub reference_income: Option<f64>,
    pub benefit: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityConfig {
    pub identity_phrase: Option<String>,
    pub admin_secret: Option<String>,
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("SecurityConfig")
            .field("identity_phrase", &redact(&self.identity_phrase))
            .field("admin_secret", &redact(&self.admin_secret))
            .finish()
    }
}

impl MembershipConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MembershipError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MembershipError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MembershipError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn tier_override(&self, tier: Tier) -> Option<&TierOverride> {
        match tier {
            Tier::Platinum => self.catalog.platinum.as_ref(),
            Tier::Gold => self.catalog.gold.as_ref(),
            Tier::Silver => self.catalog.silver.as_ref(),
        }
    }

    pub fn catalog(&self) -> TierCatalog {
        let profiles = Tier::ALL
            .into_iter()
            .map(|tier| {
                let base = default_profile(tier);
                match self.tier_override(tier) {
                    None => base,
                    Some(o) => TierProfile {
                        tier,
                        discount_rate: o.discount.unwrap_or(base.discount_rate),
                        benefit: o.benefit.clone().unwrap_or(base.benefit),
                        reference_expense: o.reference_expense.unwrap_or(base.reference_expense),
                        reference_income: o.reference_income.unwrap_or(base.reference_income),
                    },
                }
            })
            .collect();
        TierCatalog::new(profiles)
    }

    pub fn registry(&self) -> InMemoryRegistry {
        match &self.members {
            Some(members) => InMemoryRegistry::with_members(members.iter().cloned()),
            None => InMemoryRegistry::with_members(default_members()),
        }
    }

    pub fn verifier(&self) -> SharedSecretVerifier {
        SharedSecretVerifier::new(
            self.security
                .identity_phrase
                .as_deref()
                .unwrap_or(DEFAULT_IDENTITY_PHRASE),
            self.security
                .admin_secret
                .as_deref()
                .unwrap_or(DEFAULT_ADMIN_SECRET),
        )
    }

    pub fn build_engine(&self) -> Result<MembershipEngine<InMemoryRegistry, SharedSecretVerifier>> {
        self.validate()?;
        Ok(MembershipEngine::new(
            self.catalog(),
            self.registry(),
            self.verifier(),
        ))
    }
}

impl Validate for MembershipConfig {
    fn validate(&self) -> Result<()> {
        for tier in Tier::ALL {
            let Some(o) = self.tier_override(tier) else {
                continue;
            };
            let section = tier.as_str().to_lowercase();
            if let Some(discount) = o.discount {
                let field = format!("catalog.{}.discount", section);
                validate_non_negative(&field, discount)?;
                validate_range(&field, discount, 0.0, 1.0)?;
            }
            if let Some(expense) = o.reference_expense {
                validate_non_negative(&format!("catalog.{}.reference_expense", section), expense)?;
            }
            if let Some(income) = o.reference_income {
                validate_non_negative(&format!("catalog.{}.reference_income", section), income)?;
            }
            if let Some(benefit) = &o.benefit {
                validate_non_empty_string(&format!("catalog.{}.benefit", section), benefit)?;
            }
        }

        if let Some(phrase) = &self.security.identity_phrase {
            validate_non_empty_string("security.identity_phrase", phrase)?;
        }
        if let Some(secret) = &self.security.admin_secret {
            validate_non_empty_string("security.admin_secret", secret)?;
        }

        if let Some(members) = &self.members {
            for member in members {
                validate_username("members.username", &member.username)?;
            }
            validate_unique("members.username", members.iter().map(|m| m.username.as_str()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogProvider, CredentialVerifier, MemberRegistry};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MembershipConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog(), TierCatalog::default());
        assert_eq!(config.registry(), InMemoryRegistry::seeded());
        assert!(config.verifier().verify_admin("pacmann"));
    }

    #[test]
    fn test_partial_overrides() {
        let config = MembershipConfig::from_toml_str(
            r#"
[catalog.gold]
discount = 0.12

[security]
admin_secret = "s3cret"

[[members]]
username = "Dewi"
tier = "Silver"
"#,
        )
        .unwrap();

        let catalog = config.catalog();
        assert_eq!(catalog.discount_rate(Tier::Gold), 0.12);
        assert_eq!(catalog.reference_point(Tier::Gold), (6.0, 10.0));
        assert_eq!(catalog.profile(Tier::Silver).discount_rate, 0.08);

        let registry = config.registry();
        assert_eq!(registry.lookup("Dewi"), Some(Tier::Silver));
        assert!(!registry.contains("Ana"));

        let verifier = config.verifier();
        assert!(verifier.verify_admin("s3cret"));
        assert!(verifier.verify_identity("Dewi", "registered_member"));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PAC_MEMBERSHIP_TEST_ADMIN", "from-env");
        let config = MembershipConfig::from_toml_str(
            r#"
[security]
admin_secret = "${PAC_MEMBERSHIP_TEST_ADMIN}"
identity_phrase = "${PAC_MEMBERSHIP_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();

        let verifier = config.verifier();
        assert!(verifier.verify_admin("from-env"));
        assert!(verifier.verify_identity("Ana", "${PAC_MEMBERSHIP_TEST_UNSET_VAR}"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config =
            MembershipConfig::from_toml_str("[catalog.platinum]\ndiscount = 1.5\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, MembershipError::ValidationError { ref field, .. } if field == "catalog.platinum.discount")
        );

        let config = MembershipConfig::from_toml_str(
            "[[members]]\nusername = \"Ana\"\ntier = \"Gold\"\n[[members]]\nusername = \"Ana\"\ntier = \"Silver\"\n",
        )
        .unwrap();
        assert!(config.build_engine().is_err());

        let config = MembershipConfig::from_toml_str("[security]\nadmin_secret = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_tier_and_keys_fail_to_parse() {
        let err = MembershipConfig::from_toml_str(
            "[[members]]\nusername = \"Ana\"\ntier = \"Bronze\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, MembershipError::ConfigParseError { .. }));

        assert!(MembershipConfig::from_toml_str("[catalog.diamond]\ndiscount = 0.2\n").is_err());
    }

    #[test]
    fn test_debug_redacts_security() {
        let config =
            MembershipConfig::from_toml_str("[security]\nadmin_secret = \"hunter2\"\n").unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
