//! Built-in variable group key lists.
//!
//! Group order and key order are load-bearing: metadata sheet row
//! anchors are cumulative sums of the lengths of earlier groups.

/// Study-area variables, in sheet order.
pub const AREA_VARS: &[&str] = &[
    "PLOT_TYPE",
    "PLOT_AREA",
    "PROVINCE",
    "STUDY_AREA",
    "MUNICIPALITY",
    "FOREST",
    "PROV_REGION",
    "MAIN_SPECIE",
    "SPECIE_IFN_ID",
    "SLOPE",
    "ASPECT",
    "CONTINENTALITY",
    "LONGITUDE",
    "LATITUDE",
    "ALTITUDE",
    "AA_RAINFALL",
    "MA_TEMPERATURE",
    "SEPTEMBER_RAIN",
    "SEPTEMBER_TEMP",
    "NOVEMBER_RAIN",
    "NOVEMBER_TEMP",
    "MARTONNE",
    "MARTONNE_2020",
    "MARTONNE_2040",
    "MARTONNE_2060",
    "MARTONNE_2080",
    "TR",
    "RAIN_AS",
    "TMIN_SO",
    "TMIN_ON",
    "TMIN_OND",
    "TMMIN_OCT",
    "TSUM_MEAN_SO",
    "TSUM_MMIN_SO",
    "TSUM_MMIN_ON",
    "TSUM_MMIN_SOND",
];

/// Growth-model metadata fields (always 8, always all emitted).
pub const MODEL_VARS: &[&str] = &[
    "MODEL_NAME",
    "SPECIE_IFN_ID",
    "APLICATION_AREA",
    "VALID_PROV_REG",
    "EXEC_TIME",
    "MODEL_TYPE",
    "MODEL_CARD_ES",
    "MODEL_CARD_EN",
];

/// Scenario step variables; `scenario_id` is filtered out of layouts.
pub const SCENARIO_VARS: &[&str] = &[
    "file_name",
    "scenario_id",
    "trees_sheet",
    "scenario_age",
    "scenario_min_age",
    "scenario_max_age",
    "scenario_action",
    "action_time",
    "cut_type",
    "cut_criteria",
    "cut_severity",
    "preserve_trees",
    "species",
    "volume_target",
];

/// Base summary variables, before any conditional extension.
pub const SUMMARY_VARS: &[&str] = &[
    "sum_hdom",
    "sum_density_b_cut",
    "sum_qmdbh_b_cut",
    "sum_ba_b_cut",
    "sum_vol_b_cut",
    "sum_density_cut",
    "stand_before_cut",
    "stand_cut",
    "stand_after_cut",
];

/// Pool of summary entries appended when their trigger variable is populated.
pub const SUMMARY_EXTENSION: &[&str] = &[
    "stand_dead",
    "stand_ingrowth",
    "QSUBER_VARS",
    "W_CORK",
    "TOTAL_W_DEBARK",
    "BARK_VOL",
    "TOTAL_V_DEBARK",
    "PPINEA_VARS",
    "ALL_CONES",
    "SOUND_CONES",
    "SOUND_SEEDS",
    "W_SOUND_CONES",
    "W_ALL_CONES",
    "MUSHROOMS_VARS",
    "EDIBLE_MUSH",
    "MARKETED_MUSH",
    "MARKETED_LACTARIUS",
    "MUSHROOM_PRODUCTIVITY",
];

/// Cut types (first three) and cut criteria (rest).
pub const CUTS: &[&str] = &[
    "Cut Down by Tallest",
    "Cut Down by Smallest",
    "Systematics cut down",
    "Percent of trees",
    "Volumen",
    "Area",
];

/// Plot-level variables, in output-column order.
pub const PLOT_VARS: &[&str] = &[
    "INVENTORY_ID",
    "PLOT_ID",
    "PLOT_TYPE",
    "PLOT_AREA",
    "PROVINCE",
    "STUDY_AREA",
    "MUNICIPALITY",
    "FOREST",
    "PROV_REGION",
    "MAIN_SPECIE",
    "SPECIE_IFN_ID",
    "ID_SP1",
    "ID_SP2",
    "SLOPE",
    "ASPECT",
    "CONTINENTALITY",
    "LONGITUDE",
    "LATITUDE",
    "ALTITUDE",
    "AA_RAINFALL",
    "MA_TEMPERATURE",
    "SEPTEMBER_RAIN",
    "SEPTEMBER_TEMP",
    "NOVEMBER_RAIN",
    "NOVEMBER_TEMP",
    "MARTONNE",
    "MARTONNE_2020",
    "MARTONNE_2040",
    "MARTONNE_2060",
    "MARTONNE_2080",
    "EXPAN",
    "YEAR",
    "AGE",
    "SP1_PROPORTION",
    "SP2_PROPORTION",
    "DENSITY",
    "DENSITY_SP1",
    "DENSITY_SP2",
    "DENSITY_CUT_VOLUME",
    "DEAD_DENSITY",
    "ING_DENSITY",
    "BASAL_AREA",
    "BASAL_AREA_SP1",
    "BASAL_AREA_SP2",
    "BA_MAX",
    "BA_MIN",
    "MEAN_BA",
    "BA_CUT_VOLUME",
    "DEAD_BA",
    "ING_BA",
    "DBH_MAX",
    "DBH_MIN",
    "MEAN_DBH",
    "QM_DBH",
    "QM_DBH_SP1",
    "QM_DBH_SP2",
    "DOMINANT_DBH",
    "DOMINANT_SECTION",
    "H_MAX",
    "H_MIN",
    "MEAN_H",
    "DOMINANT_H",
    "DOMINANT_H_SP1",
    "DOMINANT_H_SP2",
    "CROWN_MEAN_D",
    "CROWN_DOM_D",
    "CANOPY_COVER",
    "CANOPY_VOL",
    "SLENDERNESS_MEAN",
    "SLENDERNESS_DOM",
    "REINEKE",
    "REINEKE_MAX",
    "HART",
    "HART_STAGGERED",
    "SI",
    "VOL",
    "BOLE_VOL",
    "BARK_VOL",
    "VOL_CUT_VOLUME",
    "DEAD_VOL",
    "ING_VOL",
    "UNWINDING",
    "VENEER",
    "SAW_BIG",
    "SAW_SMALL",
    "SAW_CANTER",
    "POST",
    "STAKE",
    "CHIPS",
    "WSW",
    "WSB",
    "WSWB",
    "WTHICKB",
    "WSTB",
    "WB2_7",
    "WB2_T",
    "WTHINB",
    "WB05",
    "WB0_2",
    "WDB",
    "WL",
    "WTBL",
    "WBL0_7",
    "WR",
    "WT",
    "WT_CUT_VOLUME",
    "DEAD_WT",
    "ING_WT",
    "CARBON_HEARTWOOD",
    "CARBON_SAPWOOD",
    "CARBON_BARK",
    "CARBON_STEM",
    "CARBON_BRANCHES",
    "CARBON_ROOTS",
    "CARBON",
    "SHANNON",
    "SIMPSON",
    "MARGALEF",
    "PIELOU",
    "W_CORK",
    "TOTAL_W_DEBARK",
    "TOTAL_V_DEBARK",
    "ALL_CONES",
    "SOUND_CONES",
    "SOUND_SEEDS",
    "W_SOUND_CONES",
    "W_ALL_CONES",
    "EDIBLE_MUSH",
    "MARKETED_MUSH",
    "MARKETED_LACTARIUS",
    "MUSHROOM_PRODUCTIVITY",
    "ZMEAN",
    "ZMAX",
    "ZSD",
    "ZSKEW",
    "ZKURT",
    "ZENTROPY",
    "PZABOVE2",
    "PZABOVEZMEAN",
    "ZQ95",
    "ZQ90",
    "ZQ75",
    "ZQ50",
    "ZQ25",
    "REF_SI_AGE",
    "REINEKE_VALUE",
    "HEGYI_RADIUS",
];

/// Plot variables shown on the description sheet only, never in the data dump.
pub const PLOT_VARS_NOT_PRINT: &[&str] = &[
    "REF_SI_AGE",
    "REINEKE_VALUE",
    "HEGYI_RADIUS",
];

/// Tree-level variables, in output-column order.
pub const TREE_VARS: &[&str] = &[
    "INVENTORY_ID",
    "PLOT_ID",
    "TREE_ID",
    "specie",
    "tree_age",
    "bearing",
    "distance",
    "expan",
    "dbh_1",
    "dbh_2",
    "dbh",
    "dbh_i",
    "height",
    "height_i",
    "stump_h",
    "bark_1",
    "bark_2",
    "bark",
    "basal_area",
    "basal_area_i",
    "bal",
    "ba_ha",
    "normal_circumference",
    "slenderness",
    "cr",
    "lcw",
    "hcb",
    "hlcw",
    "cpa",
    "crown_vol",
    "vol",
    "bole_vol",
    "bark_vol",
    "firewood_vol",
    "vol_ha",
    "unwinding",
    "veneer",
    "saw_big",
    "saw_small",
    "saw_canter",
    "post",
    "stake",
    "chips",
    "wsw",
    "wsb",
    "wswb",
    "w_cork",
    "wthickb",
    "wstb",
    "wb2_7",
    "wb2_t",
    "wthinb",
    "wb05",
    "wb0_2",
    "wdb",
    "wl",
    "wtbl",
    "wbl0_7",
    "wr",
    "wt",
    "carbon_stem",
    "carbon_branches",
    "carbon_roots",
    "carbon",
    "hegyi",
    "dbh_oc",
    "h_debark",
    "nb",
    "cork_cycle",
    "count_debark",
    "total_w_debark",
    "total_v_debark",
    "all_cones",
    "sound_cones",
    "sound_seeds",
    "w_sound_cones",
    "w_all_cones",
    "quality",
    "shape",
    "coord_x",
    "coord_y",
];

/// Sheet titles, summary headers and other fixed output strings.
pub const GENERAL_INFO: &[&str] = &[
    "PercentOfTrees",
    "Percent of trees",
    "Volumen",
    "Area",
    "Cut Down by Tallest",
    "Cut Down by Smallest",
    "Systematics cut down",
    "plot_sheet",
    "trees_sheet",
    "description_sheet",
    "summary_sheet",
    "metadata_sheet",
    "initial_inventory",
    "main_specie",
    "specie_ifn_id",
    "forest",
    "study_area",
    "model",
    "scenario",
    "inventory",
    "plot",
    "sum_age",
    "sum_year",
    "sum_hdom",
    "sum_density_b_cut",
    "sum_qmdbh_b_cut",
    "sum_ba_b_cut",
    "sum_vol_b_cut",
    "sum_density_cut",
    "sum_qmdbh_cut",
    "sum_vol_cut",
    "sum_density_a_cut",
    "sum_qmdbh_a_cut",
    "sum_ba_a_cut",
    "sum_vol_a_cut",
    "sum_density_dead",
    "sum_qmdbh_dead",
    "sum_vol_dead",
    "sum_density_ing",
    "sum_ba_ing",
    "stand_before_cut",
    "stand_cut",
    "stand_after_cut",
    "stand_dead",
    "stand_ingrowth",
    "QSUBER_VARS",
    "W_CORK",
    "BARK_VOL",
    "TOTAL_W_DEBARK",
    "TOTAL_V_DEBARK",
    "PPINEA_VARS",
    "ALL_CONES",
    "SOUND_CONES",
    "SOUND_SEEDS",
    "W_SOUND_CONES",
    "W_ALL_CONES",
    "MUSHROOMS_VARS",
    "EDIBLE_MUSH",
    "MARKETED_MUSH",
    "MARKETED_LACTARIUS",
    "MUSHROOM_PRODUCTIVITY",
    "model_info",
    "plot_info",
    "datetime",
    "LOAD",
    "INIT",
    "EXECUTION",
    "HARVEST",
    "DEBARK",
];

/// Standalone metadata-namespace keys (titles, links, model types).
pub const METADATA_INFO: &[&str] = &[
    "web_sima",
    "link_sima",
    "web_iufor",
    "link_iufor",
    "model",
    "vars",
    "plot",
    "tree",
    "summary",
    "plot_type",
    "area",
    "scenario",
    "cuts",
    "under_development",
    "tree_independent",
    "tree_dependent",
    "stand_model",
];

/// Warning flags that surface messages on the summary sheet.
pub const WARNING_VARS: &[&str] = &[
    "SPECIE_ERROR",
    "SPECIE_ERROR_TREES",
    "EXEC_ERROR",
    "EXEC_ERROR_SUMMARY",
    "CUT_ERROR",
    "CUT_ERROR_SUMMARY",
];
