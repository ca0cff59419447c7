// Output dataset names, relative to the output directory
pub const WEREWOLF_DATASET: &str = "werewolf_dataset";
pub const VILLAGER_DATASET: &str = "villager_dataset";

// Files written inside each dataset directory
pub const DATASET_DATA_FILE: &str = "data.jsonl";
pub const DATASET_INFO_FILE: &str = "dataset_info.json";

// Input logs are admitted by suffix only; JSONL content under a .json name is fine
pub const LOG_FILE_SUFFIX: &str = ".json";

// A bid turn only becomes a villager example when its prompt contains this
pub const VILLAGER_MARKER: &str = "the Villager";

// ChatML-style turn markers
pub const IM_START: &str = "<im_start>";
pub const IM_END: &str = "<im_end>";
pub const USER_ROLE: &str = "user";
pub const ASSISTANT_ROLE: &str = "assistant";
