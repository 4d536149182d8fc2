use actix_web::{HttpResponse, Responder};

// Minimal shells so the session guard has concrete pages to gate. The admin
// UI assets themselves are served elsewhere.

pub async fn admin_home_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            "<!doctype html>\n<title>Admin</title>\n\
             <h1>Admin</h1>\n\
             <form method=\"post\" action=\"/api/auth/logout\">\
             <button type=\"submit\">Log out</button></form>\n",
        )
}

pub async fn admin_login_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            "<!doctype html>\n<title>Admin login</title>\n\
             <h1>Admin login</h1>\n\
             <input id=\"key\" type=\"password\" placeholder=\"Secret key\">\n\
             <button onclick=\"fetch('/api/auth/login',{method:'POST',\
headers:{'Content-Type':'application/json'},\
body:JSON.stringify({key:document.getElementById('key').value})})\
.then(r=>{if(r.ok)location.href='/admin'})\">Log in</button>\n",
        )
}
