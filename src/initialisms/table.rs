//! The initialism table
//!
//! Ordered. Entries near the top shadow later, shorter ones; see the module
//! docs before moving anything.

use super::Exclusion::{FollowedBy, FollowedByThenUpper, PrecededBy};
use super::{InitialismRule as R, Spelling as S};

/// All initialism rules, applied front to back
pub static INITIALISMS: &[R] = &[
    // In API models the camel-cased "Ids" is a set of identifiers, so it
    // renders as "IDs" rather than the IDS initialism
    R::matched("Ids", "IDs", "ids", &[S::exact("Ids")]),
    // Identifier, Idle, Identity and IdempotencyToken are words, not IDs
    R::matched(
        "Id",
        "ID",
        "id",
        &[S::exact("Id").except(&[
            FollowedBy("entifier"),
            FollowedBy("le"),
            FollowedBy("entity"),
            FollowedBy("empotency"),
        ])],
    ),
    // The same API spells DbiResourceId, DBInstanceIdentifier and
    // DbInstanceIdentifier
    R::matched("Dbi", "DBI", "dbi", &[S::exact("Dbi")]),
    R::matched("Db", "DB", "db", &[S::exact("Db").except(&[FollowedBy("i")])]),
    R::matched("Db", "DB", "db", &[S::exact("DB")]),
    // caCertificateIdentifier, not cACertificateIdentifier
    R::matched("CACert", "CACert", "caCert", &[S::exact("CACert")]),
    // md5OfBody, not mD5OfBody
    R::matched("MD5Of", "MD5Of", "md5Of", &[S::exact("MD5Of"), S::exact("Md5Of")]),
    R::matched("Ipc", "IPC", "ipc", &[S::exact("Ipc")]),
    R::literal("IPAddress", "IPAddress", "ip_address"),
    R::matched("IPv4", "IPv4", "ipv4", &[S::exact("IPv4"), S::exact("Ipv4")]),
    R::matched("IPv6", "IPv6", "ipv6", &[S::exact("IPv6"), S::exact("Ipv6")]),
    // MultipartUpload and Ipam
    R::matched(
        "Ip",
        "IP",
        "ip",
        &[S::exact("Ip").except(&[FollowedBy("art"), FollowedBy("am")])],
    ),
    R::literal("IPSet", "IPSet", "ip_set"),
    // AMI fields always capitalize the 'A'
    R::matched("Amis", "AMIs", "amis", &[S::exact("Amis")]),
    R::matched("Ami", "AMI", "ami", &[S::exact("Ami")]),
    R::literal("Acl", "ACL", "acl"),
    R::literal("Acm", "ACM", "acm"),
    R::literal("AIML", "AIML", "aiml"),
    R::literal("Acp", "ACP", "acp"),
    R::literal("Api", "API", "api"),
    R::literal("Arn", "ARN", "arn"),
    R::literal("Asn", "ASN", "asn"),
    // "awsvpc" network mode, exported as AwsvpcConfiguration
    R::literal("Awsvpc", "AWSVPC", "awsVPC"),
    R::literal("Aws", "AWS", "aws"),
    R::literal("Az", "AZ", "az"),
    R::literal("Bgp", "BGP", "bgp"),
    R::literal("Cors", "CORS", "cors"),
    R::literal("Cidr", "CIDR", "cidr"),
    R::literal("Cname", "CNAME", "cname"),
    R::literal("Cpu", "CPU", "cpu"),
    R::literal("Crl", "CRL", "crl"),
    R::literal("Cps", "CPS", "cps"),
    R::literal("Csr", "CSR", "csr"),
    R::literal("Dhcp", "DHCP", "dhcp"),
    R::literal("Dns", "DNS", "dns"),
    R::literal("Dpd", "DPD", "dpd"),
    R::literal("Ebs", "EBS", "ebs"),
    R::literal("Ec2", "EC2", "ec2"),
    // Secret and Decrease
    R::matched(
        "Ecr",
        "ECR",
        "ecr",
        &[
            S::exact("Ecr").except(&[FollowedBy("et"), FollowedBy("ease")]),
            S::exact("ecr").except(&[FollowedBy("et"), FollowedBy("ease")]),
        ],
    ),
    R::literal("Ecs", "ECS", "ecs"),
    R::matched("Edi", "EDI", "edi", &[S::exact("Edi").except(&[FollowedBy("t")])]),
    R::literal("Efs", "EFS", "efs"),
    R::literal("Eks", "EKS", "eks"),
    // Enable, Enabling
    R::matched("Ena", "ENA", "ena", &[S::exact("Ena").except(&[FollowedBy("bl")])]),
    R::literal("Ecmp", "ECMP", "ecmp"),
    R::literal("Fifo", "FIFO", "fifo"),
    R::literal("Fpga", "FPGA", "fpga"),
    R::literal("Gid", "GID", "gid"),
    R::literal("Gpu", "GPU", "gpu"),
    R::literal("Grpc", "GRPC", "grpc"),
    R::literal("Html", "HTML", "html"),
    // HTTPSPort must not become httpSPort
    R::matched(
        "Http",
        "HTTP",
        "http",
        &[
            S::exact("HTTP").except(&[FollowedByThenUpper("S")]),
            S::exact("Http").except(&[FollowedBy("s")]),
        ],
    ),
    R::literal("Https", "HTTPS", "https"),
    R::literal("Iam", "IAM", "iam"),
    R::literal("Icmp", "ICMP", "icmp"),
    R::matched("Io", "IO", "io", &[S::exact("Io").except(&[FollowedBy("ps")])]),
    R::literal("Iops", "IOPS", "iops"),
    R::literal("Ipam", "IPAM", "ipam"),
    R::literal("Ja3", "JA3", "ja3"),
    R::literal("Json", "JSON", "json"),
    R::literal("Jwt", "JWT", "jwt"),
    R::literal("Kms", "KMS", "kms"),
    R::literal("Ldap", "LDAP", "ldap"),
    R::literal("Mfa", "MFA", "mfa"),
    R::matched("Mibps", "MiBps", "miBps", &[S::exact("Mibps")]),
    // Native
    R::matched("Nat", "NAT", "nat", &[S::exact("Nat").except(&[FollowedBy("i")])]),
    // Oid must not become oID, nor OIDC become OIDc
    R::matched("Oid", "OID", "oid", &[S::exact("Oid").except(&[FollowedBy("c")])]),
    R::matched("OID", "OID", "oid", &[S::exact("OID").except(&[FollowedBy("C")])]),
    R::literal("Oidc", "OIDC", "oidc"),
    R::literal("Ocsp", "OCSP", "ocsp"),
    R::literal("Pca", "PCA", "pca"),
    R::literal("Pid", "PID", "pid"),
    R::matched("Ramdisk", "RAMDisk", "ramDisk", &[S::exact("Ramdisk")]),
    R::matched("Ram", "RAM", "ram", &[S::exact("Ram")]),
    R::literal("Rfc", "RFC", "rfc"),
    R::literal("Sasl", "SASL", "sasl"),
    R::literal("Scram", "SCRAM", "scram"),
    R::literal("Sdk", "SDK", "sdk"),
    R::literal("Sha256", "SHA256", "sha256"),
    R::literal("Sns", "SNS", "sns"),
    R::literal("Sqli", "SQLI", "sqli"),
    R::literal("Sql", "SQL", "sql"),
    R::literal("Sqs", "SQS", "sqs"),
    R::literal("Sriov", "SRIOV", "sriov"),
    R::literal("Sse", "SSE", "sse"),
    R::literal("Ssl", "SSL", "ssl"),
    R::literal("Tcp", "TCP", "tcp"),
    R::literal("Tde", "TDE", "tde"),
    R::literal("Tpm", "TPM", "tpm"),
    R::literal("Tls", "TLS", "tls"),
    // Throttle, Throttling
    R::matched(
        "Ttl",
        "TTL",
        "ttl",
        &[S::any_case("ttl").except(&[PrecededBy("Thro"), FollowedBy("ing"), FollowedBy("e")])],
    ),
    R::literal("Udp", "UDP", "udp"),
    // security must not become secURIty
    R::matched(
        "Uri",
        "URI",
        "uri",
        &[S::exact("uri").except(&[FollowedBy("ty")]), S::exact("Uri")],
    ),
    R::literal("Url", "URL", "url"),
    R::literal("Uuid", "UUID", "uuid"),
    R::matched("Uids", "UIDs", "uids", &[S::exact("Uids")]),
    R::matched("Uid", "UID", "uid", &[S::exact("Uid")]),
    // Uid and Uuid must not become UId or UUId
    R::matched(
        "Ui",
        "UI",
        "ui",
        &[
            S::exact("UI").except(&[FollowedBy("D"), FollowedBy("d")]),
            S::exact("Ui").except(&[FollowedBy("D"), FollowedBy("d")]),
        ],
    ),
    R::literal("Vlan", "VLAN", "vlan"),
    R::literal("Vpc", "VPC", "vpc"),
    R::literal("Vpn", "VPN", "vpn"),
    R::literal("Vgw", "VGW", "vgw"),
    R::literal("Waf", "WAF", "waf"),
    R::literal("Xml", "XML", "xml"),
    R::literal("Xss", "XSS", "xss"),
    R::literal("Yaml", "YAML", "yaml"),
];
