//! Compiled-in checkpoint data for each network.
//!
//! Genesis (height 0) is not listed here; it is supplied by the caller when
//! the profile is resolved.
//!
//! What makes a good checkpoint block:
//! - surrounded by blocks with reasonable timestamps (none before it with a
//!   later timestamp, none after it with an earlier one)
//! - contains no unusual transactions

use crate::table::CheckpointMetadata;

/// Production checkpoints, in source order.
///
/// Height 2 appears twice with the same hash. The entry is kept as listed
/// and resolved at construction time (see `DuplicatePolicy`).
// TODO: confirm heights 2 and 3 against a synced mainnet node and drop the repeated entry.
pub const MAINNET_CHECKPOINTS: &[(u64, &str)] = &[
    (2, "6f8d257348ef0c1f579f3693ffa6476bcf801e6ac4c74de8317dc39da92bdbd2"),
    (3, "b2d5648320770adf33069804ccc009947543d5f4d6b83ad56d814157bea44bc6"),
    (2, "6f8d257348ef0c1f579f3693ffa6476bcf801e6ac4c74de8317dc39da92bdbd2"),
    (8, "9f8f6b2ae11604131abd4d5ff0b39d2ed8519e16dfe911778dfec6356cf65d90"),
    (25, "081b1fabdb94f98cd15dd4ab1e97bc634ba484973794dfc121284fccc70fb014"),
    (26, "102190e258609398c032de01ba66b28ac6970e24f4b5f77810d96853a6e65b65"),
    (39, "dd49b0b4ec6d242f02d53e2e5799339932451c7f7bede8eab9b98ed217494251"),
    (44, "93360c9841b526e6948296c560f423ec6c965620f761ef92682d92131ac02ac8"),
    (71, "d41f24ea11d9ee373e8f773a39bf82233e5a8ae7450396da08a4a46dfeeb7769"),
    (121, "7a9313768b7c9e5c1cc6ceab6ff88f51f98e10a3690f34a88c2761d5b66ba06e"),
    (200, "109e4b201c383c6027158a7d47e920a427433dd5788ce23d0bd8fba03927efc9"),
    (255, "1205a3efa1e63201220c7235bf827026cc4b296ee6b85842ae68515963bf162b"),
    (853, "6eff35ed6d1ff0d168d6e2d129dced88204c7d95f25f8df64ab8cc2971fc073c"),
    (1965, "3dd138210d6887945e0b781eff08020b4d2c9165ff3a536902a4b309f18c97dc"),
    (1983, "396a0b09dc0de17f2b39b83633c2fd8133a9a594fe55e57e8dda593a5b8cedc5"),
    (1991, "e1b05a2faf2a8af14d199f23793520cd68462005d648c576000fb451a4304f29"),
    (2659, "209110f7e8d7680930ece8e74b4798555c621a43e8a8bd4d64d6d0067061940e"),
    (2989, "2b1098121686dea0c8e421b8169358158d7ccd4eebfbf6d7407021c850c293c3"),
    (3900, "9587837996c39c00346e96204ac817b209538ef7861fef8ab0f4064c5594193d"),
    (3961, "85519e2b4cd1b0327bd850e522abc962e95bb1ef0bfe637cb8e58cad9e2b1a1d"),
    (4826, "8350936b4fd6e0569530eb5cefa36167bbd971cfc625dc9f9b8243fa83240645"),
    (5622, "bf015a3acc9230a384bd87fc4a848c94ba0325fd3b37490324134a4c34261377"),
    (6524, "78af056bc4cdd37eefd7c2068191d0cb1179747b5325c9030501f5865e07c962"),
    (6739, "d667eb79b6b32901a1e3688aebae9fb5a970c3f943a12167bebbe6201f468654"),
    (7707, "ab9130d37e665ec0b5a659b4b0c1ee4f148931ad11290879df52bdae0d50131a"),
    (8929, "be5ee63b2214ff746226d757a203458291ce3e5c8cd8706cefc224bfed5e84f0"),
    (9757, "249a118dd9c9c73c53a70471f3117fd787f0124e105815c261ba9d0652b434ac"),
    (11372, "2d73a7da6b9009d1adfc8f83e12bc439c79295f15a3f411e0c4e8b1ab8cb5917"),
    (11695, "36f581aae80ab0aed333307d7b7f9a5498d765b8dd9ef0fddeacb1cf23ab95b7"),
    (11756, "d8c71a76bfefe4c9673d45f9ca7a84f96f93b2653a0fe847a4b5c0a80667fe6a"),
    (15806, "7ba75cbc87f11c83acb9fad9561cd893ba2c4716e15c9076a37fd2d279a8855e"),
    (16244, "14af2d3a906a0f40730d5643ff358f56275d212c0bd8e2a3f6a458a46c632b8c"),
    (21758, "5081d35e9dd7b24df2f55c3684057a85937629f19dd208db6b89c7fb114da921"),
    (21822, "44f31abceac19b5f8ea0568c1f098495996edde70df43fb8e457075a4f465269"),
    (23259, "d36ea10e9444462aa6c97194de5df016de5539e46667b526a5024b2a0cfde646"),
    (26286, "323fdb28c7f11255273c254004f9eac168fcea184a0ee1442dfef4fd9a0e1e75"),
    (28921, "568d730f0515db21bde3b0d16ac5af46886a622cab76f351fba26f24885eb967"),
    (31399, "26821e5267a4699041d2ec62ab8f88dca6c15f1970ec2cff286c812518810b48"),
    (31950, "bb5668b9730e65ce784e491b445ef4f19a1b76aea0e47de1445d5ab307ebd736"),
    (60000, "3d3857fa9edb5739362df87241cb539c88689567bbf12b3fd8cf4eac47f22521"),
];

pub const MAINNET_METADATA: CheckpointMetadata = CheckpointMetadata {
    last_checkpoint_timestamp: 1_392_233_509,
    // The tx=... count logged when the last checkpoint became the best chain.
    last_checkpoint_tx_count: 12_491,
    estimated_tx_per_day: 60_000.0,
};

/// Testnet pins only its genesis block.
pub const TESTNET_CHECKPOINTS: &[(u64, &str)] = &[];

pub const TESTNET_METADATA: CheckpointMetadata = CheckpointMetadata {
    last_checkpoint_timestamp: 1_389_221_120,
    last_checkpoint_tx_count: 1,
    estimated_tx_per_day: 2_100.0,
};
