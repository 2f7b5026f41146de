//! Energy breakdown by component group, spatial tasking design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::aggregate::component_map;
use figs_lib::aggregate::Component;
use figs_lib::aggregate::CorrectionRule;
use figs_lib::aggregate::GroupSpec;
use figs_lib::error::FigureResult;
use figs_lib::render;
use figs_lib::render::FigureStyle;

const FIGURE_NAME: &str = "fig-evaluation-ebreak-space";

const BMARKS: [&str; 2] = ["bilateral", "strsearch"];

const CONFIGS: [&str; 6] =
    ["IO", "O3", "8/1x4/1", "8/2x4/1", "8/4x4/1", "8/8x4/1"];

// Column order of the raw energy rows below
const COMPS: [Component; 24] = [
    Component::Alu,
    Component::MulDiv,
    Component::Fpu,
    Component::RegfileRd,
    Component::RegfileWr,
    Component::FetchDecode,
    Component::Rename,
    Component::Rob,
    Component::Iq,
    Component::Lsq,
    Component::Bpred,
    Component::Agen,
    Component::MemDep,
    Component::BypassPipereg,
    Component::IcacheRd,
    Component::DcacheRd,
    Component::DcacheWr,
    Component::L2Cache,
    Component::TpaDataq,
    Component::TpaL0,
    Component::TpaPvfb,
    Component::TpaRt,
    Component::TpaTmu,
    Component::Leak,
];

// Raw per-component energy, one block per benchmark, one row per
// configuration, columns as in COMPS. The single-lane configuration's
// I$ energy is left uncorrected here; see pib_correction below.
const ENERGY_DATA: [[[f64; 24]; 6]; 2] = [
    // bilateral
    [
        // IO
        [
            21156272.5,   // alu
            600138.3,     // muldiv
            123865749.2,  // fpu
            32070776.0,   // regfile_rd
            19004000.0,   // regfile_wr
            80386506.0,   // fetch/decode
            0.0,          // rename
            0.0,          // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            3207382.4,    // agen
            0.0,          // memdep
            200966265.0,  // bypass/pipereg
            809230647.6,  // icache_rd
            195638491.5,  // dcache_rd
            27628937.4,   // dcache_wr
            8905564.8,    // l2cache
            0.0,          // tpa-dataq
            0.0,          // tpa-l0
            0.0,          // tpa-pvfb
            0.0,          // tpa-rt
            0.0,          // tpa-tmu
            0.0,          // leak
        ],
        // O3
        [
            21156690.0,   // alu
            600147.6,     // muldiv
            123865759.4,  // fpu
            137978015.76, // regfile_rd
            74116030.56,  // regfile_wr
            78068799.0,   // fetch/decode
            281287569.92, // rename
            278946995.52, // rob
            307416883.6,  // iq
            93342556.8,   // lsq
            71216656.4,   // bpred
            3207648.0,    // agen
            30839214.96,  // memdep
            141726950.83, // bypass/pipereg
            785898343.0,  // icache_rd
            181909890.5,  // dcache_rd
            27635368.9,   // dcache_wr
            8906014.4,    // l2cache
            0.0,          // tpa-dataq
            0.0,          // tpa-l0
            0.0,          // tpa-pvfb
            0.0,          // tpa-rt
            0.0,          // tpa-tmu
            0.0,          // leak
        ],
        // 8/1x4/1
        [
            40448243.0,   // alu
            2529828.2,    // muldiv
            182710752.0,  // fpu
            65736110.0,   // regfile_rd
            54741158.84,  // regfile_wr
            2529303.0,    // fetch/decode
            0.0,          // rename
            39068472.0,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            260.0,        // agen
            0.0,          // memdep
            50528100.0,   // bypass/pipereg
            27735633.7,   // icache_rd
            210458984.72, // dcache_rd
            27183305.1,   // dcache_wr
            998251.2,     // l2cache
            2574715.5,    // tpa-dataq
            0.0,          // tpa-l0
            179256.0,     // tpa-pvfb
            2150874.4,    // tpa-rt
            0.0,          // tpa-tmu
            0.0,          // leak
        ],
        // 8/2x4/1
        [
            43391603.0,   // alu
            2529828.2,    // muldiv
            182710752.0,  // fpu
            107218574.98, // regfile_rd
            59619287.48,  // regfile_wr
            5735055.0,    // fetch/decode
            0.0,          // rename
            42574366.4,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            260.0,        // agen
            0.0,          // memdep
            57325710.0,   // bypass/pipereg
            9296512.8,    // icache_rd
            295606155.02, // dcache_rd
            112303189.9,  // dcache_wr
            1084638.4,    // l2cache
            5600689.8,    // tpa-dataq
            31122670.4,   // tpa-l0
            779492.0,     // tpa-pvfb
            4904371.2,    // tpa-rt
            36.0,         // tpa-tmu
            0.0,          // leak
        ],
        // 8/4x4/1
        [
            41917043.0,   // alu
            2529828.2,    // muldiv
            182710752.0,  // fpu
            101882068.62, // regfile_rd
            57175450.04,  // regfile_wr
            10650507.0,   // fetch/decode
            0.0,          // rename
            40818001.6,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            260.0,        // agen
            0.0,          // memdep
            53244255.0,   // bypass/pipereg
            17655178.4,   // icache_rd
            283458732.4,  // dcache_rd
            68267091.0,   // dcache_wr
            1171569.6,    // l2cache
            6737193.9,    // tpa-dataq
            58635534.8,   // tpa-l0
            892164.0,     // tpa-pvfb
            9413426.4,    // tpa-rt
            72.0,         // tpa-tmu
            0.0,          // leak
        ],
        // 8/8x4/1
        [
            41179763.0,   // alu
            2529828.2,    // muldiv
            182710752.0,  // fpu
            98662807.1,   // regfile_rd
            55953531.32,  // regfile_wr
            22128690.0,   // fetch/decode
            0.0,          // rename
            39939819.2,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            260.0,        // agen
            0.0,          // memdep
            55321725.0,   // bypass/pipereg
            34371969.0,   // icache_rd
            243872722.84, // dcache_rd
            46821817.4,   // dcache_wr
            1197137.6,    // l2cache
            1492823.4,    // tpa-dataq
            113661263.6,  // tpa-l0
            1461572.0,    // tpa-pvfb
            18502047.2,   // tpa-rt
            144.0,        // tpa-tmu
            0.0,          // leak
        ],
    ],
    // strsearch
    [
        // IO
        [
            41105387.5,   // alu
            0.0,          // muldiv
            0.0,          // fpu
            21218283.2,   // regfile_rd
            12230648.8,   // regfile_wr
            71646204.0,   // fetch/decode
            0.0,          // rename
            0.0,          // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            3052980.0,    // agen
            0.0,          // memdep
            179115510.0,  // bypass/pipereg
            721240525.9,  // icache_rd
            199933079.0,  // dcache_rd
            3062391.7,    // dcache_wr
            112822.4,     // l2cache
            0.0,          // tpa-dataq
            0.0,          // tpa-l0
            0.0,          // tpa-pvfb
            0.0,          // tpa-rt
            0.0,          // tpa-tmu
            0.0,          // leak
        ],
        // O3
        [
            41950267.5,    // alu
            0.0,           // muldiv
            0.0,           // fpu
            100691719.44,  // regfile_rd
            48641555.04,   // regfile_wr
            64648917.0,    // fetch/decode
            207449351.04,  // rename
            207929888.64,  // rob
            219760574.32,  // iq
            92491044.24,   // lsq
            215003161.568, // bpred
            3178386.4,     // agen
            28838471.76,   // memdep
            61409344.9939, // bypass/pipereg
            650803332.5,   // icache_rd
            208248291.0,   // dcache_rd
            3073426.8,     // dcache_wr
            114715.2,      // l2cache
            0.0,           // tpa-dataq
            0.0,           // tpa-l0
            0.0,           // tpa-pvfb
            0.0,           // tpa-rt
            0.0,           // tpa-tmu
            0.0,           // leak
        ],
        // 8/1x4/1
        [
            74414320.5,   // alu
            979.2,        // muldiv
            0.0,          // fpu
            66794692.22,  // regfile_rd
            34868444.36,  // regfile_wr
            8852775.0,    // fetch/decode
            0.0,          // rename
            29550324.8,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            1099.2,       // agen
            0.0,          // memdep
            176916165.0,  // bypass/pipereg
            121873604.4,  // icache_rd
            313672547.78, // dcache_rd
            3590603.3,    // dcache_wr
            379280.0,     // l2cache
            1747490.4,    // tpa-dataq
            0.0,          // tpa-l0
            3417638.0,    // tpa-pvfb
            7469027.2,    // tpa-rt
            0.0,          // tpa-tmu
            0.0,          // leak
        ],
        // 8/2x4/1
        [
            74416030.5,   // alu
            979.2,        // muldiv
            0.0,          // fpu
            66472712.28,  // regfile_rd
            34869990.2,   // regfile_wr
            14265471.0,   // fetch/decode
            0.0,          // rename
            29551379.2,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            1099.2,       // agen
            0.0,          // memdep
            142594995.0,  // bypass/pipereg
            34306077.0,   // icache_rd
            259690811.12, // dcache_rd
            3613264.2,    // dcache_wr
            382652.8,     // l2cache
            1438628.7,    // tpa-dataq
            95751032.8,   // tpa-l0
            5631325.0,    // tpa-pvfb
            11781221.6,   // tpa-rt
            108.0,        // tpa-tmu
            0.0,          // leak
        ],
        // 8/4x4/1
        [
            74414046.0,   // alu
            979.2,        // muldiv
            0.0,          // fpu
            65195113.94,  // regfile_rd
            34868444.36,  // regfile_wr
            23235033.0,   // fetch/decode
            0.0,          // rename
            29550227.2,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            1099.2,       // agen
            0.0,          // memdep
            116155260.0,  // bypass/pipereg
            57902554.7,   // icache_rd
            231690298.84, // dcache_rd
            3657355.5,    // dcache_wr
            396252.8,     // l2cache
            1279273.8,    // tpa-dataq
            156609483.9,  // tpa-l0
            9487471.0,    // tpa-pvfb
            19143664.8,   // tpa-rt
            216.0,        // tpa-tmu
            0.0,          // leak
        ],
        // 8/8x4/1
        [
            74413470.0,   // alu
            979.2,        // muldiv
            0.0,          // fpu
            63691092.98,  // regfile_rd
            34868186.72,  // regfile_wr
            35783553.0,   // fetch/decode
            0.0,          // rename
            29549948.0,   // rob
            0.0,          // iq
            0.0,          // lsq
            0.0,          // bpred
            1099.2,       // agen
            0.0,          // memdep
            89458882.5,   // bypass/pipereg
            92499578.3,   // icache_rd
            217278491.6,  // dcache_rd
            3709690.7,    // dcache_wr
            421820.8,     // l2cache
            1159783.5,    // tpa-dataq
            238913861.0,  // tpa-l0
            14799778.0,   // tpa-pvfb
            29365656.8,   // tpa-rt
            432.0,        // tpa-tmu
            0.0,          // leak
        ],
    ],
];

/// The single-lane configuration was simulated without a PIB, so its
/// I$ energy is inflated. Scale the I$ energy by 1/8 (8 words per
/// cache line) and assume the remaining 7/8 would have been spent in
/// the PIB, which is modeled at half the energy per hit of the I$.
fn pib_correction() -> CorrectionRule {
    CorrectionRule {
        source: Component::IcacheRd,
        configs: vec![2], // 8/1x4/1
        splits: vec![
            (Component::TpaL0, 0.5 * 0.875),
            (Component::IcacheRd, 0.125),
        ],
    }
}

fn group_colors() -> Vec<RGBColor> {
    // Stack order, bottom to top: dcache .. icache
    vec![
        RGBColor(0x00, 0x73, 0xe6), // dcache
        RGBColor(0x99, 0xcc, 0xff), // lsu
        RGBColor(0xff, 0xcc, 0x66), // llfu
        RGBColor(0xff, 0xff, 0x99), // slfu
        RGBColor(0xcc, 0x00, 0x00), // rt/rob
        RGBColor(0xff, 0x33, 0x33), // rf
        RGBColor(0x99, 0xff, 0x99), // front
        RGBColor(0x00, 0xb3, 0x59), // tmu
        RGBColor(0xbd, 0x80, 0xff), // pib
        RGBColor(0xf2, 0xe6, 0xff), // icache
    ]
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> FigureResult<()> {
    let spec = GroupSpec::energy_breakdown();
    let correction = pib_correction();
    let num_groups = spec.groups.len();

    // panels[benchmark][stack][config], stacked bottom-up in reverse
    // group order, values in mJ
    let mut panels = Vec::with_capacity(BMARKS.len());
    for bmark_rows in &ENERGY_DATA {
        let mut stacks = vec![Vec::with_capacity(CONFIGS.len()); num_groups];
        for (c, row) in bmark_rows.iter().enumerate() {
            let mut map = component_map(&COMPS, row);
            correction.apply(c, &mut map)?;

            let grouped = spec.aggregate(&map)?;
            for (s, (_, value)) in grouped.iter().rev().enumerate() {
                stacks[s].push(value / 1e9);
            }
        }
        panels.push(stacks);
    }

    let stack_names: Vec<&str> = spec
        .groups
        .iter()
        .rev()
        .map(|(group, _)| group.label())
        .collect();

    let style = FigureStyle::make(900, 450, group_colors());
    render::stacked_bars(
        FIGURE_NAME,
        &BMARKS,
        &CONFIGS,
        &stack_names,
        &panels,
        "Energy (mJ)",
        &style,
    )
}
