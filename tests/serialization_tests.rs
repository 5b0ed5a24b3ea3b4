//! End-to-end serialization tests against a captured deposit response.

use neo_dex::transaction::{
    serialize_transaction, sign_array, sign_transaction, SignItem, Transaction, Witness,
};
use neo_dex::wallet::KeyPair;
use serde_json::json;

/// An invocation transaction exactly as the exchange returns it from a
/// deposit creation call.
fn deposit_transaction() -> Transaction {
    serde_json::from_value(json!({
        "hash": "71d280abc0a6d6063573faf7c0c3d5ecc3fb8e9f505728ec4f5a3f04f0daef23",
        "sha256": "e2c7cfa234ffe2bc00441580b3ad0b8bbd436a5d4ff1933ef92219349e9d3fd3",
        "type": 209,
        "version": 1,
        "attributes": [{
            "usage": 32,
            "data": "49a7f81f67944e02c9d7da02b14dc87d20ae44d1"
        }],
        "inputs": [{
            "prevHash": "476fe15755b0b244a110ebc0bb31d1034994b04908f584c3ce21322dec5f84d0",
            "prevIndex": 0
        }, {
            "prevHash": "04e412b05a3e594cbf05c3aab606fc409735fea02ab2a452f2fa0e47f3292fe9",
            "prevIndex": 47
        }],
        "outputs": [{
            "assetId": "602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7",
            "scriptHash": "e707714512577b42f9a011f8b870625429f93573",
            "value": 1e-08
        }],
        "scripts": [],
        "script": "0800ca9a3b000000001432e125258b7db0a0dffde5bd03b2b859253538ab1449a7f8\
                   1f67944e02c9d7da02b14dc87d20ae44d153c1076465706f73697467823b63e7c70a\
                   795a7615a38d1ba67d9e54c195a1",
        "gas": 0
    }))
    .expect("transaction JSON should deserialize")
}

const EXPECTED_UNSIGNED: &str = concat!(
    // type, version
    "d1",
    "01",
    // exclusive payload: script length, script, gas
    "52",
    "0800ca9a3b000000001432e125258b7db0a0dffde5bd03b2b859253538ab1449a7f81f",
    "67944e02c9d7da02b14dc87d20ae44d153c1076465706f73697467823b63e7c70a795a",
    "7615a38d1ba67d9e54c195a1",
    "0000000000000000",
    // attributes
    "01",
    "2049a7f81f67944e02c9d7da02b14dc87d20ae44d1",
    // inputs
    "02",
    "d0845fec2d3221cec384f50849b0944903d131bbc0eb10a144b2b05557e16f470000",
    "e92f29f3470efaf252a4b22aa0fe359740fc06b6aac305bf4c593e5ab012e4042f00",
    // outputs
    "01",
    "e72d286979ee6cb1b7e65dfddfb2e384100b8d148e7758de42e4168b71792c60",
    "0100000000000000",
    "7335f929546270b8f811a0f9427b5712457107e7",
);

#[test]
fn deposit_transaction_serializes_byte_for_byte() {
    let tx = deposit_transaction();
    assert_eq!(serialize_transaction(&tx, false).unwrap(), EXPECTED_UNSIGNED);
}

#[test]
fn serialization_is_deterministic() {
    let tx = deposit_transaction();
    assert_eq!(
        serialize_transaction(&tx, false).unwrap(),
        serialize_transaction(&tx, false).unwrap()
    );
}

#[test]
fn empty_witness_list_serializes_the_same_signed_or_not() {
    let tx = deposit_transaction();
    assert_eq!(serialize_transaction(&tx, true).unwrap(), EXPECTED_UNSIGNED);
}

#[test]
fn witnesses_only_extend_the_tail() {
    let mut tx = deposit_transaction();
    tx.scripts.push(Witness {
        invocation_script: "4000".to_string(),
        verification_script: "2100ac".to_string(),
    });

    let unsigned = serialize_transaction(&tx, false).unwrap();
    let signed = serialize_transaction(&tx, true).unwrap();
    assert_eq!(unsigned, EXPECTED_UNSIGNED);
    assert!(signed.starts_with(EXPECTED_UNSIGNED));
    assert_eq!(&signed[EXPECTED_UNSIGNED.len()..], "01024000032100ac");
}

#[test]
fn signing_covers_the_unsigned_form() {
    struct Recorder;
    impl neo_dex::Signer for Recorder {
        fn sign(&self, message: &[u8]) -> neo_dex::Result<Vec<u8>> {
            Ok(message.to_vec())
        }
    }

    let tx = deposit_transaction();
    let echoed = sign_transaction(&tx, &Recorder).unwrap();
    assert_eq!(echoed, EXPECTED_UNSIGNED);
}

#[test]
fn sign_array_signs_each_item_with_a_real_key() {
    let key = KeyPair::from_private_key(&[0x42; 32]).unwrap();
    let tx = deposit_transaction();
    let items = vec![
        SignItem {
            id: "d85f76d2-1c13-432d-a17f-a54009734f59".to_string(),
            txn: tx.clone(),
        },
        SignItem {
            id: "other".to_string(),
            txn: tx.clone(),
        },
    ];

    let signed = sign_array(&items, &key).unwrap();
    assert_eq!(signed.len(), 2);
    // Same transaction, same key: deterministic signing must agree.
    assert_eq!(
        signed["d85f76d2-1c13-432d-a17f-a54009734f59"],
        signed["other"]
    );
    assert_eq!(signed["other"].len(), 128);
    assert_eq!(signed["other"], sign_transaction(&tx, &key).unwrap());
}
