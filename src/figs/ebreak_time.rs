//! Energy breakdown by component group, temporal tasking design points

use std::process;

use plotters::style::RGBColor;

use figs_lib::aggregate::component_map;
use figs_lib::aggregate::Component;
use figs_lib::aggregate::GroupSpec;
use figs_lib::error::FigureResult;
use figs_lib::render;
use figs_lib::render::FigureStyle;

const FIGURE_NAME: &str = "fig-evaluation-ebreak-time";

const BMARKS: [&str; 2] = ["bilateral", "strsearch"];

const CONFIGS: [&str; 9] = [
    "IO",
    "O3",
    "4/2x8/1",
    "4/2x8/2",
    "4/2x8/4",
    "4/2x8/8",
    "8/2x4/1",
    "8/2x4/2",
    "8/2x4/4",
];

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
// configuration, columns as in COMPS. Every configuration here has a
// PIB, so no correction is needed.
const ENERGY_DATA: [[[f64; 24]; 9]; 2] = [
    // bilateral
    [
        // IO
        [
            21156272.5,    // alu
            600138.3,      // muldiv
            123865749.2,   // fpu
            32070776.0,    // regfile_rd
            19004000.0,    // regfile_wr
            80386506.0,    // fetch/decode
            0.0,           // rename
            0.0,           // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            3207382.4,     // agen
            0.0,           // memdep
            200966265.0,   // bypass/pipereg
            809230647.6,   // icache_rd
            195638491.5,   // dcache_rd
            27628937.4,    // dcache_wr
            8905564.8,     // l2cache
            0.0,           // tpa-dataq
            0.0,           // tpa-l0
            0.0,           // tpa-pvfb
            0.0,           // tpa-rt
            0.0,           // tpa-tmu
            0.0,           // leak
        ],
        // O3
        [
            21156690.0,    // alu
            600147.6,      // muldiv
            123865759.4,   // fpu
            137978015.76,  // regfile_rd
            74116030.56,   // regfile_wr
            78068799.0,    // fetch/decode
            281287569.92,  // rename
            278946995.52,  // rob
            307416883.6,   // iq
            93342556.8,    // lsq
            71216656.4,    // bpred
            3207648.0,     // agen
            30839214.96,   // memdep
            141726950.83,  // bypass/pipereg
            785898343.0,   // icache_rd
            181909890.5,   // dcache_rd
            27635368.9,    // dcache_wr
            8906014.4,     // l2cache
            0.0,           // tpa-dataq
            0.0,           // tpa-l0
            0.0,           // tpa-pvfb
            0.0,           // tpa-rt
            0.0,           // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/1
        [
            43391603.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            109139398.7,   // regfile_rd
            59619287.48,   // regfile_wr
            5526972.0,     // fetch/decode
            0.0,           // rename
            42574366.4,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            27626580.0,    // bypass/pipereg
            9296512.8,     // icache_rd
            337580067.56,  // dcache_rd
            112156619.4,   // dcache_wr
            1070929.6,     // l2cache
            8452598.7,     // tpa-dataq
            31122670.4,    // tpa-l0
            779492.0,      // tpa-pvfb
            4969220.8,     // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/2
        [
            43391603.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            109205838.18,  // regfile_rd
            59619287.48,   // regfile_wr
            11372889.0,    // fetch/decode
            0.0,           // rename
            42574366.4,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            56856165.0,    // bypass/pipereg
            10802406.1,    // icache_rd
            337131050.06,  // dcache_rd
            111476437.5,   // dcache_wr
            1094752.0,     // l2cache
            8452598.7,     // tpa-dataq
            60412382.0,    // tpa-l0
            1092868.0,     // tpa-pvfb
            10185843.2,    // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/4
        [
            43391603.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            110114037.26,  // regfile_rd
            59619287.48,   // regfile_wr
            23159820.0,    // fetch/decode
            0.0,           // rename
            42574366.4,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            115790820.0,   // bypass/pipereg
            11795955.9,    // icache_rd
            337218830.06,  // dcache_rd
            111744664.9,   // dcache_wr
            1099539.2,     // l2cache
            8452598.7,     // tpa-dataq
            117219880.6,   // tpa-l0
            1719620.0,     // tpa-pvfb
            20689870.4,    // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/8
        [
            43391603.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            112135162.04,  // regfile_rd
            59619264.88,   // regfile_wr
            46196403.0,    // fetch/decode
            0.0,           // rename
            42574356.8,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            230973735.0,   // bypass/pipereg
            8845053.5,     // icache_rd
            337241297.56,  // dcache_rd
            112107063.0,   // dcache_wr
            1109004.8,     // l2cache
            8452598.7,     // tpa-dataq
            232289279.6,   // tpa-l0
            2973124.0,     // tpa-pvfb
            41503336.0,    // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
        // 8/2x4/1
        [
            41917043.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            101882068.62,  // regfile_rd
            57175450.04,   // regfile_wr
            10650507.0,    // fetch/decode
            0.0,           // rename
            40818001.6,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            53244255.0,    // bypass/pipereg
            17655178.4,    // icache_rd
            283458732.4,   // dcache_rd
            68267091.0,    // dcache_wr
            1171569.6,     // l2cache
            6737193.9,     // tpa-dataq
            58635534.8,    // tpa-l0
            892164.0,      // tpa-pvfb
            9413426.4,     // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
        // 8/2x4/2
        [
            41917043.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            101331030.9,   // regfile_rd
            57175450.04,   // regfile_wr
            21682056.0,    // fetch/decode
            0.0,           // rename
            40818001.6,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            108402000.0,   // bypass/pipereg
            22276895.8,    // icache_rd
            283394702.4,   // dcache_rd
            68238115.4,    // dcache_wr
            1176896.0,     // l2cache
            6737193.9,     // tpa-dataq
            113168716.7,   // tpa-l0
            1547588.0,     // tpa-pvfb
            19228500.0,    // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
        // 8/2x4/4
        [
            41917043.0,    // alu
            2529828.2,     // muldiv
            182710752.0,   // fpu
            103364639.92,  // regfile_rd
            57175450.04,   // regfile_wr
            43258209.0,    // fetch/decode
            0.0,           // rename
            40818001.6,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            260.0,         // agen
            0.0,           // memdep
            216282765.0,   // bypass/pipereg
            25601766.8,    // icache_rd
            283344637.4,   // dcache_rd
            67858047.6,    // dcache_wr
            1178201.6,     // l2cache
            6737193.9,     // tpa-dataq
            219097964.9,   // tpa-l0
            2858436.0,     // tpa-pvfb
            39088280.8,    // tpa-rt
            72.0,          // tpa-tmu
            0.0,           // leak
        ],
    ],
    // strsearch
    [
        // IO
        [
            41105387.5,    // alu
            0.0,           // muldiv
            0.0,           // fpu
            21218283.2,    // regfile_rd
            12230648.8,    // regfile_wr
            71646204.0,    // fetch/decode
            0.0,           // rename
            0.0,           // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            3052980.0,     // agen
            0.0,           // memdep
            179115510.0,   // bypass/pipereg
            721240525.9,   // icache_rd
            199933079.0,   // dcache_rd
            3062391.7,     // dcache_wr
            112822.4,      // l2cache
            0.0,           // tpa-dataq
            0.0,           // tpa-l0
            0.0,           // tpa-pvfb
            0.0,           // tpa-rt
            0.0,           // tpa-tmu
            0.0,           // leak
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
        // 4/2x8/1
        [
            74416030.5,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            67983352.78,   // regfile_rd
            34869990.2,    // regfile_wr
            14222139.0,    // fetch/decode
            0.0,           // rename
            29551379.2,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            71090790.0,    // bypass/pipereg
            34306077.0,    // icache_rd
            231720778.84,  // dcache_rd
            3613873.5,     // dcache_wr
            386243.2,      // l2cache
            1282287.0,     // tpa-dataq
            96504960.7,    // tpa-l0
            5631325.0,     // tpa-pvfb
            11793395.2,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/2
        [
            74415841.5,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            70589046.9,    // regfile_rd
            34869990.2,    // regfile_wr
            16165977.0,    // fetch/decode
            0.0,           // rename
            29551312.0,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            80809980.0,    // bypass/pipereg
            54105891.1,    // icache_rd
            231662753.5,   // dcache_rd
            3616852.3,     // dcache_wr
            382108.8,      // l2cache
            1328640.9,     // tpa-dataq
            96027936.6,    // tpa-l0
            6342854.0,     // tpa-pvfb
            13622006.4,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/4
        [
            74415567.0,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            72720491.32,   // regfile_rd
            34869990.2,    // regfile_wr
            25005444.0,    // fetch/decode
            0.0,           // rename
            29551214.4,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            125007315.0,   // bypass/pipereg
            54243452.6,    // icache_rd
            231655743.34,  // dcache_rd
            3603312.3,     // dcache_wr
            381020.8,      // l2cache
            1341829.5,     // tpa-dataq
            129055487.1,   // tpa-l0
            10052532.0,    // tpa-pvfb
            20988374.4,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
        // 4/2x8/8
        [
            74415085.5,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            73437776.9,    // regfile_rd
            34869990.2,    // regfile_wr
            39541803.0,    // fetch/decode
            0.0,           // rename
            29551043.2,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            197689110.0,   // bypass/pipereg
            366592.2,      // icache_rd
            231663844.06,  // dcache_rd
            3596948.5,     // dcache_wr
            381020.8,      // l2cache
            1333480.8,     // tpa-dataq
            200645266.6,   // tpa-l0
            16264073.0,    // tpa-pvfb
            33053170.4,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
        // 8/2x4/1
        [
            74414046.0,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            65195113.94,   // regfile_rd
            34868444.36,   // regfile_wr
            23235033.0,    // fetch/decode
            0.0,           // rename
            29550227.2,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            116155260.0,   // bypass/pipereg
            57902554.7,    // icache_rd
            231690298.84,  // dcache_rd
            3657355.5,     // dcache_wr
            396252.8,      // l2cache
            1279273.8,     // tpa-dataq
            156609483.9,   // tpa-l0
            9487471.0,     // tpa-pvfb
            19143664.8,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
        // 8/2x4/2
        [
            74413776.0,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            68991629.18,   // regfile_rd
            34868444.36,   // regfile_wr
            25837113.0,    // fetch/decode
            0.0,           // rename
            29550131.2,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            129165660.0,   // bypass/pipereg
            74008427.6,    // icache_rd
            231621967.68,  // dcache_rd
            3672520.3,     // dcache_wr
            400931.2,      // l2cache
            1335047.4,     // tpa-dataq
            151106062.4,   // tpa-l0
            10468269.0,    // tpa-pvfb
            21526053.6,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
        // 8/2x4/4
        [
            74413294.5,    // alu
            979.2,         // muldiv
            0.0,           // fpu
            71679571.48,   // regfile_rd
            34868444.36,   // regfile_wr
            39980049.0,    // fetch/decode
            0.0,           // rename
            29549960.0,    // rob
            0.0,           // iq
            0.0,           // lsq
            0.0,           // bpred
            1099.2,        // agen
            0.0,           // memdep
            199880340.0,   // bypass/pipereg
            92660342.2,    // icache_rd
            231630378.9,   // dcache_rd
            3680373.5,     // dcache_wr
            405392.0,      // l2cache
            1336006.2,     // tpa-dataq
            206376698.1,   // tpa-l0
            16521393.0,    // tpa-pvfb
            33534957.6,    // tpa-rt
            216.0,         // tpa-tmu
            0.0,           // leak
        ],
    ],
];

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
    let num_groups = spec.groups.len();

    // panels[benchmark][stack][config], stacked bottom-up in reverse
    // group order, values in mJ
    let mut panels = Vec::with_capacity(BMARKS.len());
    for bmark_rows in &ENERGY_DATA {
        let mut stacks = vec![Vec::with_capacity(CONFIGS.len()); num_groups];
        for row in bmark_rows.iter() {
            let map = component_map(&COMPS, row);

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
