//! Builtin entity-type rules.
//!
//! Pass-through entities push business profit into the owner's ordinary
//! computation; taxable entities pay corporate tax first. Owner
//! compensation is taxable where the structure pays a real wage
//! (individual employment, S corporation salary requirements, C
//! corporation payroll) and an untaxed draw where it does not.

use crate::models::{EntityType, EntityTypeRule};

pub(super) fn builtin() -> Vec<EntityTypeRule> {
    vec![
        EntityTypeRule {
            entity_type: EntityType::Individual,
            is_pass_through: true,
            owner_compensation_taxable: true,
        },
        EntityTypeRule {
            entity_type: EntityType::SoleProprietor,
            is_pass_through: true,
            owner_compensation_taxable: false,
        },
        EntityTypeRule {
            entity_type: EntityType::Partnership,
            is_pass_through: true,
            owner_compensation_taxable: false,
        },
        EntityTypeRule {
            entity_type: EntityType::LlcPassThrough,
            is_pass_through: true,
            owner_compensation_taxable: false,
        },
        EntityTypeRule {
            entity_type: EntityType::SCorporation,
            is_pass_through: true,
            owner_compensation_taxable: true,
        },
        EntityTypeRule {
            entity_type: EntityType::CCorporation,
            is_pass_through: false,
            owner_compensation_taxable: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_entity_type() {
        let rules = builtin();

        for entity_type in EntityType::ALL {
            assert!(
                rules.iter().any(|r| r.entity_type == entity_type),
                "no builtin rule for {}",
                entity_type.as_str()
            );
        }
    }

    #[test]
    fn only_the_c_corporation_is_a_taxable_entity() {
        let taxable: Vec<EntityType> = builtin()
            .into_iter()
            .filter(|r| !r.is_pass_through)
            .map(|r| r.entity_type)
            .collect();

        assert_eq!(taxable, vec![EntityType::CCorporation]);
    }
}
