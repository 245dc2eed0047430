// Uninteresting hosts, emails and URLs
// Values are lowercase with leading and trailing slashes removed.

pub const JUNK_EMAILS: &[&str] = &["test@test.com"];

pub const JUNK_HOSTS_AND_DOMAINS: &[&str] = &[
    "exmaple.com",
    "example.com",
    "example.net",
    "example.org",
    "test.com",
    "2x.png",
    "schemas.android.com",
    "1.2.3.4",
    "yimg.com",
    "a.b.c",
    "maps.google.com",
    "hostname",
];

pub const JUNK_IPS: &[&str] = &["1.2.3.4"];

pub const JUNK_URLS: &[&str] = &[
    "http://www.adobe.com/2006/mxml",
    "http://www.w3.org/1999/xsl/transform",
    "http://docs.oasis-open.org/ns/xri/xrd-1.0",
    "http://www.w3.org/2001/xmlschema-instance",
    "http://java.sun.com/xml/ns/persistence/persistence_1_0.xsd",
    "http://bing.com",
    "http://google.com",
    "http://msn.com",
    "http://maven.apache.org/maven-v4_0_0.xsd",
    "http://maven.apache.org/pom/4.0.0",
    "http://www.w3.org/markup/dtd/xhtml-rdfa-1.dtd",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns",
    "http://www.w3.org/1999/xhtml",
    "http://www.w3.org/1999/xmlschema",
    "http://www.w3.org/1999/xmlschema-instance",
    "http://www.w3.org/2000/svg",
    "http://www.w3.org/2001/xmlschema",
    "http://www.w3.org/2000/10/xmlschema",
    "http://www.w3.org/2000/10/xmlschema-instance",
    "http://www.w3.org/2002/12/soap-encoding",
    "http://www.w3.org/2002/12/soap-envelope",
    "http://www.w3.org/2005/atom",
    "http://www.w3.org/2006/01/wsdl",
    "http://www.w3.org/2006/01/wsdl/http",
    "http://www.w3.org/2006/01/wsdl/soap",
    "http://www.w3.org/2006/vcard/ns",
    "http://www.w3.org/international/o-url-and-ident.html",
    "http://www.w3.org/markup",
    "http://www.w3.org/wai/gl",
    "http://xml.apache.org/axis/session",
    "http://xml.apache.org/xml-soap",
    "http://cobertura.sourceforge.net/xml/coverage-01.dtd",
    "http://hibernate.sourceforge.net/hibernate-configuration-2.0.dtd",
    "http://hibernate.sourceforge.net/hibernate-generic.dtd",
    "http://hibernate.sourceforge.net/hibernate-mapping-2.0.dtd",
    "http://www.opensymphony.com/xwork/xwork-1.0.dtd",
    "http://www",
    "http://www.w3.org/hypertext/www/protocols/http/htresp.html",
    "http://www.w3.org/hypertext/www/protocols/http/object_headers.html",
    "http://www.w3.org/p3p",
    "http://www.w3.org/pub/www",
    "http://www.w3.org/tr/html4/strict.dtd",
    "http://www.w3.org/tr/rec-html40/loose.dtd",
    "http://www.w3.org/tr/xhtml1/dtd/xhtml1-strict.dtd",
    "http://www.w3.org/tr/xhtml1/dtd/xhtml1-transitional.dtd",
    "http://www.w3.org/tr/xslt",
    "https:",
    "http://www.example.com",
    "http://www.example.com/dir/file",
    "http://www.your.org.here",
    "http://hostname",
    "http://glade.gnome.org/glade-2.0.dtd",
    "http://www.freedesktop.org/standards/dbus/1.0/busconfig.dtd",
    "http://www.freedesktop.org/standards/dbus/1.0/introspect.dtd",
    "http://gcc.gnu.org/bugs.html",
];

pub const JUNK_URL_PREFIXES: &[&str] = &[
    "http://www.springframework.org/dtd/",
    "http://www.slickedit.com/dtd/",
    "http://www.puppycrawl.com/dtds/",
    "http://foo.bar.baz",
    "http://foo.bar.com",
    "http://foobar.com",
    "http://java.sun.com/xml/ns/",
    "http://java.sun.com/dtd/",
    "http://java.sun.com/j2ee/dtds/",
    "http://schemas.microsoft.com/",
    "http://dublincore.org/schemas/",
    "http://www.w3.org/tr/",
    "http://www.apple.com/dtds",
    "http://apache.org/xml/features/",
    "http://apache.org/xml/properties/",
    "http://crl.verisign.com/",
    "http://crl.globalsign.net/",
    "http://crl.microsoft.com/",
    "http://crl.thawte.com/",
    "http://jakarta.apache.org/commons/dtds/",
    "http://jakarta.apache.org/struts/dtds/",
    "http://www.jboss.org/j2ee/dtd/",
    "http://docbook.org/xml/simple/",
    "http://www.oasis-open.org/docbook/xml/",
];

pub const JUNK_URL_SUFFIXES: &[&str] = &[".png", ".jpg", ".gif"];

fn normalized(s: &str) -> String {
    s.to_lowercase().trim_matches('/').to_string()
}

pub fn is_junk_email(email: &str) -> bool {
    JUNK_EMAILS.contains(&normalized(email).as_str())
}

pub fn is_junk_host(host: &str) -> bool {
    JUNK_HOSTS_AND_DOMAINS.contains(&normalized(host).as_str())
}

pub fn is_junk_ip(ip: &str) -> bool {
    JUNK_IPS.contains(&normalized(ip).as_str())
}

pub fn is_junk_url(url: &str) -> bool {
    let u = normalized(url);
    JUNK_URLS.contains(&u.as_str())
        || JUNK_URL_PREFIXES.iter().any(|p| u.starts_with(p))
        || JUNK_URL_SUFFIXES.iter().any(|s| u.ends_with(s))
}
