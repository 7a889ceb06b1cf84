#![cfg(test)]
use eonmap_common::error::InventoryError;
use eonmap_common::inventory::file::InventoryFile;
use eonmap_core::report::Report;
use eonmap_core::service::ReportService;
use eonmap_core::source::DirectorySource;

use crate::utils::InventoryDir;

fn generate(inv: &InventoryDir) -> Result<Report, InventoryError> {
    ReportService::new(Box::new(DirectorySource::new(inv.path()))).generate()
}

/// The canonical three-file scenario: one CMDB entry, one asset and two hosts in PROD.
#[test]
fn round_trip_single_asset() {
    let inv = InventoryDir::with_files(
        "# id:name:owner:app:svc:inst:notes\nCM1:web:ops:appX:svcY:instZ:-\n",
        "PROD:appX:svcY:instZ:host1\nPROD:appX:svcY:instZ:host2\n",
        "CM1:EON100\n",
    );

    let report = generate(&inv).expect("report should build");

    assert_eq!(report.render(), "EON100:PROD:appX:svcY:instZ:host1,host2\n");
}

#[test]
fn mixed_inventory() {
    let inv = InventoryDir::with_files(
        concat!(
            "CM1:web:ops:shop:api:01:-\n",
            "\n",
            "# CM9:old:ops:shop:api:01:-\n",
            "CM2:db:dba:shop:db:01:-\n",
            "CM3:batch:ops:shop:etl:01:-\n",
            "CM4:short:line\n",
            "CM5:orphan:ops:shop:api:01:-\n",
        ),
        concat!(
            "# env:app:svc:inst:host\n",
            "PROD:shop:api:01:web02\n",
            "PROD:shop:api:01:web01\n",
            "DEV:shop:api:01:devweb01\n",
            "PROD:shop:api:01:web01\n",
            "PROD:shop:db:01:db01:primary\n",
            "PROD:shop:etl\n",
        ),
        concat!(
            "CM1:EON1\r\n",
            "CM2:EON2\r\n",
            "CM3:EON3\r\n",
            "CM2: EON22 \r\n",
        ),
    );

    let report = generate(&inv).expect("report should build");

    assert_eq!(
        report.render(),
        concat!(
            "EON1:DEV:shop:api:01:devweb01\n",
            "EON1:PROD:shop:api:01:web01,web02\n",
            "EON22:PROD:shop:db:01:db01\n",
        )
    );

    let summary = report.summary;
    assert_eq!(summary.cmdb_entries, 3);
    assert_eq!(summary.deployment_keys, 2);
    assert_eq!(summary.deployments_skipped, 1);
    assert_eq!(summary.assets_read, 5);
    assert_eq!(summary.assets_malformed, 1);
    assert_eq!(summary.assets_without_cmdb, 1);
    assert_eq!(summary.assets_without_deployment, 1);
    assert_eq!(summary.assets_matched, 2);
}

#[test]
fn output_is_stable_across_runs() {
    let inv = InventoryDir::with_files(
        "CM1:a:b:app:svc:inst:z\n",
        "QA:app:svc:inst:h3\nPROD:app:svc:inst:h2\nQA:app:svc:inst:h1\nPROD:app:svc:inst:h9\n",
        "CM1:EON1\n",
    );

    let first = generate(&inv).unwrap().render();
    let second = generate(&inv).unwrap().render();

    assert_eq!(first, second);
    assert_eq!(first, "EON1:PROD:app:svc:inst:h2,h9\nEON1:QA:app:svc:inst:h1,h3\n");
}

#[test]
fn empty_files_give_empty_report() {
    let inv = InventoryDir::with_files("", "", "");

    let report = generate(&inv).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.render(), "");
}

#[test]
fn missing_file_is_fatal() {
    let inv = InventoryDir::new();
    inv.write(InventoryFile::AssetMap, "CM1:a:b:app:svc:inst:z\n");
    inv.write(InventoryFile::CmdbEonMap, "CM1:EON1\n");

    match generate(&inv) {
        Err(InventoryError::Read { file, .. }) => assert_eq!(file, InventoryFile::Deployments),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_cmdb_line_is_fatal() {
    let inv = InventoryDir::with_files("", "", "CM1:EON1\n# note\nCM2\n");

    let err = generate(&inv).unwrap_err();

    assert_eq!(
        err.to_string(),
        "cmdb_eon_map.txt line 3: expected at least 2 ':'-separated fields, found 1"
    );
}
