//! Reusable CSV content.

/// Two importable rows and one without a Name
pub const MIXED_CSV: &str = "\
Name,Code,Tier,Value,Health
X,APP-2,CORE,STANDARD,40
,APP-3,CORE,HIGH,90
";

/// Every importable column, using aliases and odd casing
pub const FULL_CSV: &str = "\
name,CODE,Tier,Business Value,Health,Capability,Owner,Domain,Lifecycle,PII,GDPR,Technical Debt,License Cost,Maintenance Cost,Data Sensitivity,Description
Billing,APP-10,Core,critical,85,CAP-FINANCE,alice,Finance,active,high,yes,low,\"$1,000\",500,CONFIDENTIAL,Invoices and payments
Web Shop,APP-11,CHANNEL,HIGH,55,CAP-SALES,bob,Commercial,PHASE_OUT,no,no,HIGH,200,100,PUBLIC,Storefront
";
