//! Component-to-group energy aggregation

use std::collections::BTreeMap;

use crate::error::DataError;
use crate::error::FigureResult;

/// Fine-grained hardware structures reported by the energy model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Component {
    Alu,
    MulDiv,
    Fpu,

    RegfileRd,
    RegfileWr,

    FetchDecode,
    Rename,
    Rob,
    Iq,
    Lsq,
    Bpred,
    Agen,
    MemDep,
    BypassPipereg,

    IcacheRd,
    DcacheRd,
    DcacheWr,
    L2Cache,

    TpaDataq,
    TpaL0,
    TpaPvfb,
    TpaRt,
    TpaTmu,

    Leak,
}

impl Component {
    pub fn label(&self) -> &'static str {
        match self {
            Component::Alu => "alu",
            Component::MulDiv => "muldiv",
            Component::Fpu => "fpu",
            Component::RegfileRd => "regfile_rd",
            Component::RegfileWr => "regfile_wr",
            Component::FetchDecode => "fetch/decode",
            Component::Rename => "rename",
            Component::Rob => "rob",
            Component::Iq => "iq",
            Component::Lsq => "lsq",
            Component::Bpred => "bpred",
            Component::Agen => "agen",
            Component::MemDep => "memdep",
            Component::BypassPipereg => "bypass/pipereg",
            Component::IcacheRd => "icache_rd",
            Component::DcacheRd => "dcache_rd",
            Component::DcacheWr => "dcache_wr",
            Component::L2Cache => "l2cache",
            Component::TpaDataq => "tpa-dataq",
            Component::TpaL0 => "tpa-l0",
            Component::TpaPvfb => "tpa-pvfb",
            Component::TpaRt => "tpa-rt",
            Component::TpaTmu => "tpa-tmu",
            Component::Leak => "leak",
        }
    }
}

/// Named groups of components used for the stacked breakdown charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Icache,
    Pib,
    Tmu,
    Front,
    Rf,
    RtRob,
    Slfu,
    Llfu,
    Lsu,
    Dcache,
}

impl Group {
    pub fn label(&self) -> &'static str {
        match self {
            Group::Icache => "icache",
            Group::Pib => "pib",
            Group::Tmu => "tmu",
            Group::Front => "front",
            Group::Rf => "rf",
            Group::RtRob => "rt/rob",
            Group::Slfu => "slfu",
            Group::Llfu => "llfu",
            Group::Lsu => "lsu",
            Group::Dcache => "dcache",
        }
    }
}

/// Per-(configuration, benchmark) map of raw component measurements
pub type ComponentMap = BTreeMap<Component, f64>;

/// Build a component map from parallel component/value slices
pub fn component_map(comps: &[Component], values: &[f64]) -> ComponentMap {
    assert!(comps.len() == values.len());
    comps.iter().copied().zip(values.iter().copied()).collect()
}

/// Ordered group definition: which components sum into which group.
/// Components listed in no group (e.g. leakage) are dropped from the
/// grouped view.
pub struct GroupSpec {
    pub groups: Vec<(Group, Vec<Component>)>,
}

impl GroupSpec {
    /// The breakdown used by the paper's energy figures
    pub fn energy_breakdown() -> Self {
        Self {
            groups: vec![
                (Group::Icache, vec![Component::IcacheRd]),
                (Group::Pib, vec![Component::TpaL0]),
                (Group::Tmu, vec![Component::TpaTmu]),
                (
                    Group::Front,
                    vec![
                        Component::FetchDecode,
                        Component::Iq,
                        Component::Bpred,
                        Component::TpaPvfb,
                    ],
                ),
                (
                    Group::Rf,
                    vec![Component::RegfileRd, Component::RegfileWr],
                ),
                (
                    Group::RtRob,
                    vec![Component::Rename, Component::TpaRt, Component::Rob],
                ),
                (Group::Slfu, vec![Component::Alu]),
                (Group::Llfu, vec![Component::MulDiv, Component::Fpu]),
                (
                    Group::Lsu,
                    vec![
                        Component::Lsq,
                        Component::Agen,
                        Component::MemDep,
                        Component::TpaDataq,
                    ],
                ),
                (
                    Group::Dcache,
                    vec![Component::DcacheRd, Component::DcacheWr],
                ),
            ],
        }
    }

    /// Collapse a component map into one summed value per group
    pub fn aggregate(
        &self,
        map: &ComponentMap,
    ) -> FigureResult<Vec<(Group, f64)>> {
        let mut result = Vec::with_capacity(self.groups.len());

        for (group, comps) in &self.groups {
            let mut value = 0.0;
            for comp in comps {
                let raw = map.get(comp).ok_or_else(|| {
                    DataError::UnknownComponent(comp.label().to_string())
                })?;
                value += raw;
            }
            result.push((*group, value));
        }

        Ok(result)
    }
}

/// A one-time empirical correction applied before aggregation.
///
/// Some configurations were measured without a component present; the
/// rule reads the source component's raw value once and rewrites each
/// destination component to `source * ratio`. The ratios are dataset
/// literals and need not sum to one.
pub struct CorrectionRule {
    pub source: Component,
    /// Indices of the affected configurations
    pub configs: Vec<usize>,
    /// (destination, ratio) pairs; the source may be a destination
    pub splits: Vec<(Component, f64)>,
}

impl CorrectionRule {
    /// Apply the rule to one configuration's component map.
    /// Maps for configurations outside `configs` are left untouched.
    pub fn apply(
        &self,
        config: usize,
        map: &mut ComponentMap,
    ) -> FigureResult<()> {
        if !self.configs.contains(&config) {
            return Ok(());
        }

        let source = *map.get(&self.source).ok_or_else(|| {
            DataError::UnknownComponent(self.source.label().to_string())
        })?;

        for (dest, ratio) in &self.splits {
            map.insert(*dest, source * ratio);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_spec() -> GroupSpec {
        GroupSpec {
            groups: vec![
                (Group::Slfu, vec![Component::Alu, Component::MulDiv]),
                (Group::Llfu, vec![Component::Fpu]),
            ],
        }
    }

    #[test]
    fn test_aggregate_sums_groups() {
        let map = component_map(
            &[Component::Alu, Component::MulDiv, Component::Fpu],
            &[10.0, 20.0, 5.0],
        );
        let agg = small_spec().aggregate(&map).unwrap();
        assert_eq!(
            agg,
            vec![(Group::Slfu, 30.0), (Group::Llfu, 5.0)]
        );
    }

    #[test]
    fn test_ungrouped_components_are_dropped() {
        let map = component_map(
            &[
                Component::Alu,
                Component::MulDiv,
                Component::Fpu,
                Component::Leak,
            ],
            &[10.0, 20.0, 5.0, 999.0],
        );
        let agg = small_spec().aggregate(&map).unwrap();
        let total: f64 = agg.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 35.0);
    }

    #[test]
    fn test_missing_component_fails() {
        let map = component_map(&[Component::Alu], &[10.0]);
        let err = small_spec().aggregate(&map).unwrap_err();
        assert!(err.to_string().contains("muldiv"));
    }

    #[test]
    fn test_correction_split_values() {
        // I$ measured without a PIB: keep 1/8 of the energy as I$,
        // move 7/8 * 1/2 to the PIB buffer
        let rule = CorrectionRule {
            source: Component::IcacheRd,
            configs: vec![1],
            splits: vec![
                (Component::TpaL0, 0.5 * 0.875),
                (Component::IcacheRd, 0.125),
            ],
        };

        let mut map = component_map(
            &[Component::IcacheRd, Component::TpaL0],
            &[800.0, 0.0],
        );
        rule.apply(1, &mut map).unwrap();
        assert_eq!(map[&Component::IcacheRd], 800.0 * 0.125);
        assert_eq!(map[&Component::TpaL0], 800.0 * 0.5 * 0.875);
    }

    #[test]
    fn test_correction_skips_other_configs() {
        let rule = CorrectionRule {
            source: Component::IcacheRd,
            configs: vec![1],
            splits: vec![(Component::IcacheRd, 0.125)],
        };
        let mut map = component_map(&[Component::IcacheRd], &[800.0]);
        rule.apply(0, &mut map).unwrap();
        assert_eq!(map[&Component::IcacheRd], 800.0);
    }

    #[test]
    fn test_complementary_split_preserves_total() {
        let rule = CorrectionRule {
            source: Component::DcacheRd,
            configs: vec![0],
            splits: vec![
                (Component::DcacheRd, 0.25),
                (Component::DcacheWr, 0.75),
            ],
        };
        let mut map = component_map(
            &[Component::DcacheRd, Component::DcacheWr],
            &[100.0, 0.0],
        );
        rule.apply(0, &mut map).unwrap();
        let total = map[&Component::DcacheRd] + map[&Component::DcacheWr];
        assert!((total - 100.0).abs() < 1e-9);
    }
}
